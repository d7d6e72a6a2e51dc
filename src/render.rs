//! Textual rendering shared by the typed values.

use crate::flags::{FlagName, Flags, Namespace};

/// How a value is turned into text: `"<text>"@<lang>` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap each text in double quotes.
    pub print_quotes: bool,
    /// Append `<separator><lang>`.
    pub print_lang: bool,
    /// Placed between the text (or set) and the language.
    pub separator: String,
}

impl RenderOptions {
    /// Options taken from the PRINT_* flags of `namespace`.
    pub fn from_flags(flags: &Flags, namespace: Namespace) -> Self {
        Self {
            print_quotes: flags.is_enabled(namespace, FlagName::PrintWithQuotes),
            print_lang: flags.is_enabled(namespace, FlagName::PrintWithLang),
            separator: "@".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub(crate) fn text(&self, text: &str) -> String {
        if self.print_quotes {
            format!("\"{}\"", text)
        } else {
            text.to_string()
        }
    }

    pub(crate) fn lang_suffix(&self, lang: &str) -> String {
        if self.print_lang {
            format!("{}{}", self.separator, lang)
        } else {
            String::new()
        }
    }

    /// Render a single text with its language.
    pub(crate) fn entry(&self, text: &str, lang: &str) -> String {
        format!("{}{}", self.text(text), self.lang_suffix(lang))
    }

    /// Render a set of texts (already in display order) with its language.
    pub(crate) fn set<'a>(&self, texts: impl IntoIterator<Item = &'a String>, lang: &str) -> String {
        let body: Vec<String> = texts.into_iter().map(|t| self.text(t)).collect();
        format!("{{{}}}{}", body.join(", "), self.lang_suffix(lang))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_flags(&Flags::new(), Namespace::Global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flag;

    #[test]
    fn test_default_entry() {
        assert_eq!(RenderOptions::default().entry("Hello", "en"), "\"Hello\"@en");
    }

    #[test]
    fn test_toggles_are_independent() {
        let no_quotes = RenderOptions {
            print_quotes: false,
            ..RenderOptions::default()
        };
        assert_eq!(no_quotes.entry("Hi", "en"), "Hi@en");

        let no_lang = RenderOptions {
            print_lang: false,
            ..RenderOptions::default()
        };
        assert_eq!(no_lang.entry("Hi", "en"), "\"Hi\"");
    }

    #[test]
    fn test_set_rendering_and_separator() {
        let texts = vec!["a".to_string(), "b".to_string()];
        let opts = RenderOptions::default().with_separator(" @ ");
        assert_eq!(opts.set(&texts, "en"), "{\"a\", \"b\"} @ en");
        assert_eq!(RenderOptions::default().set(&Vec::<String>::new(), "en"), "{}@en");
    }

    #[test]
    fn test_from_flags_reads_namespace() {
        let flags = Flags::new().with(Flag::set_lang_string(FlagName::PrintWithQuotes), false);
        assert!(!RenderOptions::from_flags(&flags, Namespace::SetLangString).print_quotes);
        assert!(RenderOptions::from_flags(&flags, Namespace::LangString).print_quotes);
    }
}
