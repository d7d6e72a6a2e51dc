//! LangString: a single text tagged with a language.
//!
//! Language tags compare case-insensitively, texts compare case-sensitively.
//! Values are immutable; every text-producing operation returns a new
//! `LangString` carrying the same `lang`.

use crate::error::{Error, Result};
use crate::flags::{Controller, FlagName, Flags, Namespace};
use crate::normalize::{casefold, same_lang, Normalizer};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

/// A (text, lang) pair. Empty strings stand for "absent".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawLangString")]
pub struct LangString {
    text: String,
    lang: String,
    #[serde(skip)]
    flags: Flags,
}

#[derive(Deserialize)]
struct RawLangString {
    #[serde(default)]
    text: String,
    #[serde(default)]
    lang: String,
}

impl TryFrom<RawLangString> for LangString {
    type Error = Error;

    fn try_from(raw: RawLangString) -> Result<Self> {
        LangString::new(raw.text, raw.lang)
    }
}

impl LangString {
    /// Create a LangString validated against the process-wide flags.
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Result<Self> {
        Self::with_flags(text, lang, &Controller::flags())
    }

    /// Create a LangString validated against explicit flags.
    ///
    /// The `flags` snapshot is kept and used for later operations and rendering.
    pub fn with_flags(
        text: impl Into<String>,
        lang: impl Into<String>,
        flags: &Flags,
    ) -> Result<Self> {
        let normalizer = Normalizer::new(flags, Namespace::LangString);
        let text = normalizer.text(text)?;
        let lang = normalizer.lang(lang)?;
        Ok(Self {
            text,
            lang,
            flags: *flags,
        })
    }

    /// Create a LangString with an empty `lang`.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        Self::new(text, "")
    }

    /// Assemble from parts that were already validated by a container.
    pub(crate) fn from_parts(text: String, lang: String, flags: Flags) -> Self {
        Self { text, lang, flags }
    }

    /// New value with the same `lang` and flags; skips the construction gates.
    fn derive(&self, text: String) -> Self {
        Self {
            text,
            lang: self.lang.clone(),
            flags: self.flags,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn into_parts(self) -> (String, String) {
        (self.text, self.lang)
    }

    /// Number of characters in `text`.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn lang_key(&self) -> String {
        casefold(&self.lang)
    }

    // ==================== Comparison ====================

    /// Compare texts of two same-language values.
    ///
    /// Fails with [`Error::IncompatibleLanguages`] when the languages differ.
    pub fn try_cmp(&self, other: &LangString) -> Result<Ordering> {
        self.ensure_same_lang(other)?;
        Ok(self.text.cmp(&other.text))
    }

    /// Compare `text` against a plain string.
    pub fn compare_text(&self, other: &str) -> Ordering {
        self.text.as_str().cmp(other)
    }

    fn ensure_same_lang(&self, other: &LangString) -> Result<()> {
        if same_lang(&self.lang, &other.lang) {
            Ok(())
        } else {
            Err(Error::incompatible(&self.lang, &other.lang))
        }
    }

    // ==================== Concatenation ====================

    /// Concatenate two same-language values.
    pub fn concat(&self, other: &LangString) -> Result<LangString> {
        self.ensure_same_lang(other)?;
        Ok(self.derive(format!("{}{}", self.text, other.text)))
    }

    /// Append a plain string, keeping `lang`.
    ///
    /// Rejected when METHODS_MATCH_TYPES is enabled.
    pub fn concat_text(&self, other: &str) -> Result<LangString> {
        if self
            .flags
            .is_enabled(Namespace::LangString, FlagName::MethodsMatchTypes)
        {
            return Err(Error::StrictTypes {
                operation: "concatenation",
                expected: "LangString",
                actual: "str",
            });
        }
        Ok(self.derive(format!("{}{}", self.text, other)))
    }

    // ==================== Rendering ====================

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from_flags(&self.flags, Namespace::LangString)
    }

    pub fn to_string_with(&self, options: &RenderOptions) -> String {
        options.entry(&self.text, &self.lang)
    }

    // ==================== Case Transforms ====================

    pub fn to_uppercase(&self) -> LangString {
        self.derive(self.text.to_uppercase())
    }

    pub fn to_lowercase(&self) -> LangString {
        self.derive(self.text.to_lowercase())
    }

    /// Caseless form of `text`, for case-insensitive text comparison.
    pub fn casefold(&self) -> LangString {
        self.derive(casefold(&self.text))
    }

    /// First character uppercased, the rest lowercased.
    pub fn capitalize(&self) -> LangString {
        let mut chars = self.text.chars();
        let text = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        };
        self.derive(text)
    }

    pub fn swapcase(&self) -> LangString {
        let text = self
            .text
            .chars()
            .flat_map(|c| -> Box<dyn Iterator<Item = char>> {
                if c.is_uppercase() {
                    Box::new(c.to_lowercase())
                } else if c.is_lowercase() {
                    Box::new(c.to_uppercase())
                } else {
                    Box::new(std::iter::once(c))
                }
            })
            .collect();
        self.derive(text)
    }

    /// Uppercase the first letter of every alphabetic run, lowercase the rest.
    pub fn title(&self) -> LangString {
        let mut text = String::with_capacity(self.text.len());
        let mut in_word = false;
        for c in self.text.chars() {
            if c.is_alphabetic() {
                if in_word {
                    text.extend(c.to_lowercase());
                } else {
                    text.extend(c.to_uppercase());
                }
                in_word = true;
            } else {
                text.push(c);
                in_word = false;
            }
        }
        self.derive(text)
    }

    // ==================== Trimming ====================

    pub fn trim(&self) -> LangString {
        self.derive(self.text.trim().to_string())
    }

    pub fn trim_start(&self) -> LangString {
        self.derive(self.text.trim_start().to_string())
    }

    pub fn trim_end(&self) -> LangString {
        self.derive(self.text.trim_end().to_string())
    }

    /// Remove any of `chars` from both ends.
    pub fn trim_matches(&self, chars: &[char]) -> LangString {
        self.derive(self.text.trim_matches(chars).to_string())
    }

    // ==================== Splitting ====================

    pub fn split(&self, separator: &str) -> Vec<LangString> {
        self.text
            .split(separator)
            .map(|part| self.derive(part.to_string()))
            .collect()
    }

    pub fn split_whitespace(&self) -> Vec<LangString> {
        self.text
            .split_whitespace()
            .map(|part| self.derive(part.to_string()))
            .collect()
    }

    pub fn lines(&self) -> Vec<LangString> {
        self.text
            .lines()
            .map(|line| self.derive(line.to_string()))
            .collect()
    }

    // ==================== Transformation ====================

    pub fn replace(&self, from: &str, to: &str) -> LangString {
        self.derive(self.text.replace(from, to))
    }

    pub fn repeat(&self, n: usize) -> LangString {
        self.derive(self.text.repeat(n))
    }

    /// Center within `width` characters.
    ///
    /// With odd padding the extra fill goes left when `width` is odd and
    /// right when it is even.
    pub fn center(&self, width: usize, fill: char) -> LangString {
        let pad = width.saturating_sub(self.len());
        let left = pad / 2 + (pad & width & 1);
        self.derive(padded(&self.text, fill, left, pad - left))
    }

    /// Left-justify within `width` characters.
    pub fn ljust(&self, width: usize, fill: char) -> LangString {
        let pad = width.saturating_sub(self.len());
        self.derive(padded(&self.text, fill, 0, pad))
    }

    /// Right-justify within `width` characters.
    pub fn rjust(&self, width: usize, fill: char) -> LangString {
        let pad = width.saturating_sub(self.len());
        self.derive(padded(&self.text, fill, pad, 0))
    }

    /// Left-pad with zeros to `width`, keeping a leading sign in front.
    pub fn zfill(&self, width: usize) -> LangString {
        let pad = width.saturating_sub(self.len());
        let (sign, digits) = match self.text.chars().next() {
            Some(c @ ('+' | '-')) => (Some(c), &self.text[1..]),
            _ => (None, self.text.as_str()),
        };
        let mut text: String = sign.into_iter().collect();
        text.extend(std::iter::repeat('0').take(pad));
        text.push_str(digits);
        self.derive(text)
    }

    // ==================== Indexing ====================

    /// Character at `index`, if any.
    pub fn char_at(&self, index: usize) -> Option<LangString> {
        self.text
            .chars()
            .nth(index)
            .map(|c| self.derive(c.to_string()))
    }

    /// Characters `start..end`, clamped to the text length.
    pub fn slice(&self, start: usize, end: usize) -> LangString {
        let text = self
            .text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect();
        self.derive(text)
    }

    // ==================== Searching ====================

    pub fn contains(&self, pattern: &str) -> bool {
        self.text.contains(pattern)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }

    /// Character index of the first occurrence of `pattern`.
    pub fn find(&self, pattern: &str) -> Option<usize> {
        self.text.find(pattern).map(|byte| self.char_index(byte))
    }

    /// Character index of the last occurrence of `pattern`.
    pub fn rfind(&self, pattern: &str) -> Option<usize> {
        self.text.rfind(pattern).map(|byte| self.char_index(byte))
    }

    fn char_index(&self, byte: usize) -> usize {
        self.text[..byte].chars().count()
    }

    /// Number of non-overlapping occurrences of `pattern`.
    pub fn count(&self, pattern: &str) -> usize {
        if pattern.is_empty() {
            return self.len() + 1;
        }
        self.text.matches(pattern).count()
    }

    // ==================== Predicates ====================

    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    pub fn is_numeric(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_numeric)
    }

    pub fn is_alphanumeric(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphanumeric)
    }

    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }

    /// At least one cased character, and no lowercase ones.
    pub fn is_uppercase(&self) -> bool {
        self.text.chars().any(char::is_uppercase) && !self.text.chars().any(char::is_lowercase)
    }

    /// At least one cased character, and no uppercase ones.
    pub fn is_lowercase(&self) -> bool {
        self.text.chars().any(char::is_lowercase) && !self.text.chars().any(char::is_uppercase)
    }

    // ==================== Encoding ====================

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// UTF-8 encoding of `text`.
    pub fn encode(&self) -> Vec<u8> {
        self.text.as_bytes().to_vec()
    }

    // ==================== Collections ====================

    /// Drop duplicates, keeping first occurrences.
    ///
    /// When duplicates spell their language differently, the surviving value
    /// carries the casefolded language.
    pub fn merge_langstrings(langstrings: &[LangString]) -> Vec<LangString> {
        let mut merged: Vec<LangString> = Vec::new();
        for langstring in langstrings {
            match merged.iter_mut().find(|kept| **kept == *langstring) {
                Some(kept) if kept.lang != langstring.lang => kept.lang = kept.lang_key(),
                Some(_) => {}
                None => merged.push(langstring.clone()),
            }
        }
        merged
    }
}

fn padded(text: &str, fill: char, left: usize, right: usize) -> String {
    let mut out = String::with_capacity(text.len() + left + right);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

impl Default for LangString {
    fn default() -> Self {
        Self {
            text: String::new(),
            lang: String::new(),
            flags: Flags::new(),
        }
    }
}

impl PartialEq for LangString {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && same_lang(&self.lang, &other.lang)
    }
}

impl Eq for LangString {}

impl Hash for LangString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.lang_key().hash(state);
    }
}

/// Texts are ordered only within one language; across languages there is no order.
impl PartialOrd for LangString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for LangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&self.render_options()))
    }
}

impl AsRef<str> for LangString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Prepending a plain string yields a plain string.
impl Add<&LangString> for String {
    type Output = String;

    fn add(mut self, rhs: &LangString) -> String {
        self.push_str(&rhs.text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::flags::Flag;
    use proptest::prelude::*;
    use serial_test::serial;
    use std::collections::hash_map::DefaultHasher;

    fn ls(text: &str, lang: &str) -> LangString {
        LangString::with_flags(text, lang, &Flags::new()).expect("valid langstring")
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_default_is_empty() {
        let value = LangString::default();
        assert_eq!(value.text(), "");
        assert_eq!(value.lang(), "");
    }

    #[test]
    fn test_lowercase_lang_flag() {
        let flags = Flags::new().with(Flag::global(FlagName::LowercaseLang), true);
        let value = LangString::with_flags("Hello", "EN", &flags).unwrap();
        assert_eq!(value.lang(), "en");
        assert_eq!(value.text(), "Hello");
    }

    #[test]
    fn test_strip_text_flag() {
        let flags = Flags::new().with(Flag::lang_string(FlagName::StripText), true);
        let value = LangString::with_flags("  Hi  ", "en", &flags).unwrap();
        assert_eq!(value.text(), "Hi");
    }

    #[test]
    fn test_strip_lang_flag() {
        let flags = Flags::new().with(Flag::lang_string(FlagName::StripLang), true);
        let value = LangString::with_flags("Hi", " en ", &flags).unwrap();
        assert_eq!(value.lang(), "en");
    }

    #[test]
    fn test_ensure_gates() {
        let flags = Flags::new()
            .with(Flag::global(FlagName::EnsureText), true)
            .with(Flag::global(FlagName::EnsureAnyLang), true)
            .with(Flag::global(FlagName::EnsureValidLang), true);

        let err = LangString::with_flags("", "en", &flags).unwrap_err();
        assert_eq!(err, Error::EmptyText { owner: "LangString" });

        let err = LangString::with_flags("Hi", "", &flags).unwrap_err();
        assert_eq!(err, Error::EmptyLang { owner: "LangString" });

        let err = LangString::with_flags("Hi", "not a tag", &flags).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("ENSURE_VALID_LANG"));

        assert!(LangString::with_flags("Hi", "pt-BR", &flags).is_ok());
    }

    #[test]
    fn test_gates_ignore_other_namespaces() {
        let flags = Flags::new().with(Flag::set_lang_string(FlagName::EnsureText), true);
        assert!(LangString::with_flags("", "en", &flags).is_ok());
    }

    // ==================== Equality Tests ====================

    #[test]
    fn test_lang_equality_is_case_insensitive() {
        assert_eq!(ls("Hello", "en"), ls("Hello", "EN"));
        assert_eq!(hash_of(&ls("Hello", "en")), hash_of(&ls("Hello", "EN")));
    }

    #[test]
    fn test_text_equality_is_case_sensitive() {
        assert_ne!(ls("Hello", "en"), ls("hello", "en"));
    }

    #[test]
    fn test_flags_are_not_part_of_equality() {
        let flags = Flags::new().with(Flag::global(FlagName::PrintWithQuotes), false);
        let a = LangString::with_flags("x", "en", &flags).unwrap();
        assert_eq!(a, ls("x", "en"));
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_ordering_same_lang() {
        assert!(ls("a", "en") < ls("b", "EN"));
        assert!(ls("b", "en") >= ls("a", "en"));
        assert_eq!(ls("a", "en").try_cmp(&ls("a", "En")).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_ordering_incompatible_languages() {
        let err = ls("a", "en").try_cmp(&ls("b", "fr")).unwrap_err();
        assert!(err.to_string().contains("Incompatible languages"));
        assert_eq!(ls("a", "en").partial_cmp(&ls("b", "fr")), None);
        assert!(!(ls("a", "en") < ls("b", "fr")));
    }

    #[test]
    fn test_compare_text_code_point_order() {
        assert_eq!(ls("B", "en").compare_text("a"), Ordering::Less);
    }

    // ==================== Concatenation Tests ====================

    #[test]
    fn test_concat_same_lang() {
        let joined = ls("Hello, ", "en").concat(&ls("World", "EN")).unwrap();
        assert_eq!(joined.text(), "Hello, World");
        assert_eq!(joined.lang(), "en");
    }

    #[test]
    fn test_concat_different_lang_fails() {
        let err = ls("Hello", "en").concat(&ls("Mundo", "es")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_concat_text_respects_strict_mode() {
        assert_eq!(ls("Hi", "en").concat_text("!").unwrap(), ls("Hi!", "en"));

        let strict = Flags::new().with(Flag::global(FlagName::MethodsMatchTypes), true);
        let value = LangString::with_flags("Hi", "en", &strict).unwrap();
        assert_eq!(value.concat_text("!").unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn test_string_plus_langstring_is_plain() {
        let out: String = String::from("Say: ") + &ls("Hi", "en");
        assert_eq!(out, "Say: Hi");
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_display_defaults() {
        assert_eq!(ls("Hello", "en").to_string(), "\"Hello\"@en");
    }

    #[test]
    fn test_display_uses_captured_flags() {
        let flags = Flags::new()
            .with(Flag::lang_string(FlagName::PrintWithQuotes), false)
            .with(Flag::lang_string(FlagName::PrintWithLang), false);
        let value = LangString::with_flags("Hello", "en", &flags).unwrap();
        assert_eq!(value.to_string(), "Hello");
    }

    #[test]
    fn test_to_string_with_separator() {
        let opts = RenderOptions::default().with_separator("^^");
        assert_eq!(ls("Hi", "en").to_string_with(&opts), "\"Hi\"^^en");
    }

    // ==================== Text API Tests ====================

    #[test]
    fn test_case_transforms_keep_lang() {
        let value = ls("hello wORLD", "EN");
        assert_eq!(value.to_uppercase(), ls("HELLO WORLD", "en"));
        assert_eq!(value.to_uppercase().lang(), "EN");
        assert_eq!(value.capitalize().text(), "Hello world");
        assert_eq!(value.swapcase().text(), "HELLO World");
        assert_eq!(value.title().text(), "Hello World");
        assert_eq!(ls("Straße", "de").to_lowercase().text(), "straße");
    }

    #[test]
    fn test_trimming_and_splitting() {
        let value = ls("  a b  ", "en");
        assert_eq!(value.trim().text(), "a b");
        assert_eq!(value.trim_start().text(), "a b  ");
        assert_eq!(value.trim_end().text(), "  a b");
        assert_eq!(ls("--x--", "en").trim_matches(&['-']).text(), "x");

        let parts = ls("a,b,c", "en").split(",");
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.lang() == "en"));
        assert_eq!(value.split_whitespace().len(), 2);
        assert_eq!(ls("l1\nl2", "en").lines().len(), 2);
    }

    #[test]
    fn test_padding() {
        assert_eq!(ls("ab", "en").center(6, '*').text(), "**ab**");
        assert_eq!(ls("ab", "en").center(5, '*').text(), "**ab*");
        assert_eq!(ls("abc", "en").center(6, '*').text(), "*abc**");
        assert_eq!(ls("ab", "en").ljust(4, '.').text(), "ab..");
        assert_eq!(ls("ab", "en").rjust(4, '.').text(), "..ab");
        assert_eq!(ls("-42", "en").zfill(5).text(), "-0042");
        assert_eq!(ls("42", "en").zfill(1).text(), "42");
    }

    #[test]
    fn test_indexing_and_searching() {
        let value = ls("héllo", "fr");
        assert_eq!(value.len(), 5);
        assert_eq!(value.char_at(1).unwrap().text(), "é");
        assert!(value.char_at(9).is_none());
        assert_eq!(value.slice(1, 3).text(), "él");
        assert_eq!(value.slice(3, 100).text(), "lo");
        assert!(value.contains("ll"));
        assert!(value.starts_with("hé"));
        assert!(value.ends_with("lo"));
        assert_eq!(ls("abcabc", "en").find("c"), Some(2));
        assert_eq!(ls("abcabc", "en").rfind("c"), Some(5));
        assert_eq!(ls("abcabc", "en").count("bc"), 2);
    }

    #[test]
    fn test_find_returns_char_indices() {
        let value = ls("héllo", "fr");
        let first = value.find("l").unwrap();
        let last = value.rfind("l").unwrap();
        assert_eq!((first, last), (2, 3));
        assert_eq!(value.slice(first, 100).text(), "llo");
        assert_eq!(value.char_at(last).unwrap().text(), "l");
        assert_eq!(value.find("zz"), None);
    }

    #[test]
    fn test_predicates_and_encoding() {
        assert!(ls("abc", "en").is_alphabetic());
        assert!(!ls("", "en").is_alphabetic());
        assert!(ls("123", "en").is_numeric());
        assert!(ls("a1", "en").is_alphanumeric());
        assert!(ls(" \t", "en").is_whitespace());
        assert!(ls("ABC1", "en").is_uppercase());
        assert!(!ls("123", "en").is_uppercase());
        assert!(ls("abc", "en").is_lowercase());
        assert_eq!(ls("é", "fr").encode(), vec![0xC3, 0xA9]);
        assert_eq!(ls("hi", "en").repeat(2).text(), "hihi");
        assert_eq!(ls("a-b", "en").replace("-", "+").text(), "a+b");
    }

    #[test]
    fn test_merge_langstrings() {
        let merged = LangString::merge_langstrings(&[
            ls("Hi", "EN"),
            ls("Hi", "en"),
            ls("Hi", "fr"),
            ls("Hi", "EN"),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].lang(), "en");
        assert_eq!(merged[1].lang(), "fr");
    }

    // ==================== Serde Tests ====================

    #[test]
    #[serial]
    fn test_serde_round_trip() {
        let value = ls("Olá", "pt-BR");
        let json = serde_json::to_string(&value).expect("Should serialize");
        assert_eq!(json, r#"{"text":"Olá","lang":"pt-BR"}"#);

        let restored: LangString = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(restored, value);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_lang_case_is_ignored(text in "\\PC{0,12}", lang in "[a-zA-Z]{2,3}(-[a-zA-Z]{2})?") {
            let upper = ls(&text, &lang.to_uppercase());
            let lower = ls(&text, &lang.to_lowercase());
            prop_assert_eq!(&upper, &lower);
            prop_assert_eq!(hash_of(&upper), hash_of(&lower));
        }

        #[test]
        fn prop_text_case_matters(text in "[a-z]{1,10}", lang in "[a-z]{2}") {
            prop_assert_ne!(ls(&text, &lang), ls(&text.to_uppercase(), &lang));
        }
    }
}
