//! Conversions between plain strings and the three typed values.
//!
//! Every constructed value goes through its own constructor, so the
//! validation gates of the Controller flags apply to converter output too.
//! Many-to-one conversions merge same-language texts by set union.

use crate::error::{Error, Result};
use crate::langstring::LangString;
use crate::multilangstring::MultiLangString;
use crate::normalize::casefold;
use crate::render::RenderOptions;
use crate::setlangstring::SetLangString;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// How a plain string becomes a LangString.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionStrategy {
    /// Text and language are supplied separately.
    Manual,
    /// The language is split off the input at the first separator.
    Parse,
}

impl ConversionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionStrategy::Manual => "manual",
            ConversionStrategy::Parse => "parse",
        }
    }
}

impl FromStr for ConversionStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "manual" => Ok(ConversionStrategy::Manual),
            "parse" => Ok(ConversionStrategy::Parse),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for ConversionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless conversion functions.
pub struct Converter;

impl Converter {
    // ==================== From strings ====================

    /// Build a LangString using the named strategy (`"manual"` or `"parse"`).
    ///
    /// `lang` is only used by `manual`; `separator` only by `parse`.
    pub fn from_string_to_langstring(
        strategy: &str,
        input: &str,
        lang: &str,
        separator: &str,
    ) -> Result<LangString> {
        match strategy.parse::<ConversionStrategy>()? {
            ConversionStrategy::Manual => Self::from_string_to_langstring_manual(input, lang),
            ConversionStrategy::Parse => Self::from_string_to_langstring_parse(input, separator),
        }
    }

    pub fn from_string_to_langstring_manual(text: &str, lang: &str) -> Result<LangString> {
        LangString::new(text, lang)
    }

    /// Split on the first `separator`; without one the whole input is the text
    /// and the language is empty. An empty separator never matches.
    pub fn from_string_to_langstring_parse(input: &str, separator: &str) -> Result<LangString> {
        let (text, lang) = match input.split_once(separator) {
            Some(parts) if !separator.is_empty() => parts,
            _ => (input, ""),
        };
        LangString::new(text, lang)
    }

    pub fn from_strings_to_langstrings<S: AsRef<str>>(
        strategy: &str,
        inputs: &[S],
        lang: &str,
        separator: &str,
    ) -> Result<Vec<LangString>> {
        inputs
            .iter()
            .map(|input| Self::from_string_to_langstring(strategy, input.as_ref(), lang, separator))
            .collect()
    }

    pub fn from_strings_to_setlangstring<S: AsRef<str>>(
        texts: &[S],
        lang: &str,
    ) -> Result<SetLangString> {
        SetLangString::new(texts.iter().map(|text| text.as_ref()), lang)
    }

    /// Convert each input with `strategy` and merge the results by language.
    pub fn from_strings_to_multilangstring<S: AsRef<str>>(
        strategy: &str,
        inputs: &[S],
        lang: &str,
        separator: &str,
    ) -> Result<MultiLangString> {
        let langstrings = Self::from_strings_to_langstrings(strategy, inputs, lang, separator)?;
        Self::from_langstrings_to_multilangstring(&langstrings)
    }

    // ==================== From LangString ====================

    /// `None` renders with the value's own PRINT_* flags.
    pub fn from_langstring_to_string(
        langstring: &LangString,
        options: Option<&RenderOptions>,
    ) -> String {
        match options {
            Some(options) => langstring.to_string_with(options),
            None => langstring.to_string(),
        }
    }

    pub fn from_langstrings_to_strings(
        langstrings: &[LangString],
        options: Option<&RenderOptions>,
    ) -> Vec<String> {
        langstrings
            .iter()
            .map(|langstring| Self::from_langstring_to_string(langstring, options))
            .collect()
    }

    pub fn from_langstring_to_setlangstring(langstring: &LangString) -> Result<SetLangString> {
        SetLangString::new([langstring.text()], langstring.lang())
    }

    /// All inputs must share one language; an empty slice gives an empty set with lang `""`.
    pub fn from_langstrings_to_setlangstring(langstrings: &[LangString]) -> Result<SetLangString> {
        let lang = match langstrings.first() {
            Some(first) => first.lang(),
            None => return SetLangString::empty(""),
        };
        if let Some(other) = langstrings.iter().find(|ls| casefold(ls.lang()) != casefold(lang)) {
            return Err(Error::incompatible(lang, other.lang()));
        }
        SetLangString::new(langstrings.iter().map(LangString::text), lang)
    }

    /// One set per language, in order of first appearance.
    pub fn from_langstrings_to_setlangstrings(
        langstrings: &[LangString],
    ) -> Result<Vec<SetLangString>> {
        let mut order: Vec<(&str, BTreeSet<&str>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for langstring in langstrings {
            let position = *positions
                .entry(casefold(langstring.lang()))
                .or_insert_with(|| {
                    order.push((langstring.lang(), BTreeSet::new()));
                    order.len() - 1
                });
            order[position].1.insert(langstring.text());
        }
        order
            .into_iter()
            .map(|(lang, texts)| SetLangString::new(texts, lang))
            .collect()
    }

    pub fn from_langstring_to_multilangstring(langstring: &LangString) -> Result<MultiLangString> {
        let mut mls = MultiLangString::default();
        mls.add_langstring(langstring)?;
        Ok(mls)
    }

    pub fn from_langstrings_to_multilangstring(
        langstrings: &[LangString],
    ) -> Result<MultiLangString> {
        let mut mls = MultiLangString::default();
        for langstring in langstrings {
            mls.add_langstring(langstring)?;
        }
        Ok(mls)
    }

    // ==================== From SetLangString ====================

    pub fn from_setlangstring_to_string(
        set: &SetLangString,
        options: Option<&RenderOptions>,
    ) -> String {
        match options {
            Some(options) => set.to_string_with(options),
            None => set.to_string(),
        }
    }

    /// One rendered `"text"@lang` string per member.
    pub fn from_setlangstring_to_strings(
        set: &SetLangString,
        options: Option<&RenderOptions>,
    ) -> Vec<String> {
        set.to_strings(options)
    }

    pub fn from_setlangstring_to_langstrings(set: &SetLangString) -> Vec<LangString> {
        set.to_langstrings()
    }

    pub fn from_setlangstring_to_multilangstring(set: &SetLangString) -> Result<MultiLangString> {
        let mut mls = MultiLangString::default();
        mls.add_setlangstring(set)?;
        Ok(mls)
    }

    pub fn from_setlangstrings_to_multilangstring(
        sets: &[SetLangString],
    ) -> Result<MultiLangString> {
        let mut mls = MultiLangString::default();
        for set in sets {
            mls.add_setlangstring(set)?;
        }
        Ok(mls)
    }

    // ==================== From MultiLangString ====================

    pub fn from_multilangstring_to_string(
        mls: &MultiLangString,
        options: Option<&RenderOptions>,
    ) -> String {
        match options {
            Some(options) => mls.to_string_with(options),
            None => mls.to_string(),
        }
    }

    pub fn from_multilangstring_to_strings(
        mls: &MultiLangString,
        options: Option<&RenderOptions>,
    ) -> Vec<String> {
        mls.to_strings(None, options)
    }

    /// One LangString per `(lang, text)` pair.
    pub fn from_multilangstring_to_langstrings(mls: &MultiLangString) -> Vec<LangString> {
        mls.to_langstrings(None)
    }

    /// One SetLangString per language.
    pub fn from_multilangstring_to_setlangstrings(mls: &MultiLangString) -> Vec<SetLangString> {
        mls.to_setlangstrings(None)
    }
}
