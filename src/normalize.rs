//! Construction pipeline shared by the typed values.
//!
//! Applied in a fixed order: strip (STRIP_TEXT / STRIP_LANG), casefold
//! (LOWERCASE_LANG), then the gates ENSURE_TEXT, ENSURE_ANY_LANG and
//! ENSURE_VALID_LANG. Each value type reads the flags of its own namespace.

use crate::error::{Error, Result};
use crate::flags::{FlagName, Flags, Namespace};
use crate::lang_tag;

/// Case-insensitive comparison key for language tags.
pub(crate) fn casefold(lang: &str) -> String {
    lang.to_lowercase()
}

pub(crate) fn same_lang(left: &str, right: &str) -> bool {
    left == right || casefold(left) == casefold(right)
}

/// Flags of one namespace, bound to the type name used in error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Normalizer<'a> {
    flags: &'a Flags,
    namespace: Namespace,
    owner: &'static str,
}

impl<'a> Normalizer<'a> {
    pub(crate) fn new(flags: &'a Flags, namespace: Namespace) -> Self {
        let owner = match namespace {
            Namespace::Global => "Global",
            Namespace::LangString => "LangString",
            Namespace::SetLangString => "SetLangString",
            Namespace::MultiLangString => "MultiLangString",
        };
        Self {
            flags,
            namespace,
            owner,
        }
    }

    pub(crate) fn enabled(&self, name: FlagName) -> bool {
        self.flags.is_enabled(self.namespace, name)
    }

    pub(crate) fn text(&self, text: impl Into<String>) -> Result<String> {
        let mut text = text.into();
        if self.enabled(FlagName::StripText) {
            text = text.trim().to_string();
        }
        if self.enabled(FlagName::EnsureText) && text.is_empty() {
            return Err(Error::EmptyText { owner: self.owner });
        }
        Ok(text)
    }

    pub(crate) fn lang(&self, lang: impl Into<String>) -> Result<String> {
        let mut lang = lang.into();
        if self.enabled(FlagName::StripLang) {
            lang = lang.trim().to_string();
        }
        if self.enabled(FlagName::LowercaseLang) {
            lang = casefold(&lang);
        }
        if self.enabled(FlagName::EnsureAnyLang) && lang.is_empty() {
            return Err(Error::EmptyLang { owner: self.owner });
        }
        if self.enabled(FlagName::EnsureValidLang) && !lang_tag::is_valid(&lang) {
            return Err(Error::InvalidLang {
                owner: self.owner,
                lang,
            });
        }
        Ok(lang)
    }
}
