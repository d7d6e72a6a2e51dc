//! SetLangString: a set of distinct texts sharing one language.
//!
//! Elements are case-sensitive (`"a"` and `"A"` are two members); the
//! language compares case-insensitively. Operations between two
//! SetLangStrings require matching languages. Plain sets of strings are
//! accepted as same-language operands unless METHODS_MATCH_TYPES is enabled.

use crate::error::{Error, Result};
use crate::flags::{Controller, FlagName, Flags, Namespace};
use crate::langstring::LangString;
use crate::normalize::{casefold, same_lang, Normalizer};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSetLangString")]
pub struct SetLangString {
    texts: BTreeSet<String>,
    lang: String,
    #[serde(skip)]
    flags: Flags,
}

#[derive(Deserialize)]
struct RawSetLangString {
    #[serde(default)]
    texts: Vec<String>,
    #[serde(default)]
    lang: String,
}

impl TryFrom<RawSetLangString> for SetLangString {
    type Error = Error;

    fn try_from(raw: RawSetLangString) -> Result<Self> {
        SetLangString::new(raw.texts, raw.lang)
    }
}

/// A single element offered to a SetLangString.
#[derive(Debug, Clone, Copy)]
pub enum SetMember<'a> {
    Text(&'a str),
    LangString(&'a LangString),
}

impl<'a> From<&'a str> for SetMember<'a> {
    fn from(text: &'a str) -> Self {
        SetMember::Text(text)
    }
}

impl<'a> From<&'a String> for SetMember<'a> {
    fn from(text: &'a String) -> Self {
        SetMember::Text(text)
    }
}

impl<'a> From<&'a LangString> for SetMember<'a> {
    fn from(langstring: &'a LangString) -> Self {
        SetMember::LangString(langstring)
    }
}

/// Right-hand side of a set operation.
#[derive(Debug, Clone, Copy)]
pub enum SetOperand<'a> {
    Typed(&'a SetLangString),
    Plain(&'a BTreeSet<String>),
}

impl<'a> From<&'a SetLangString> for SetOperand<'a> {
    fn from(set: &'a SetLangString) -> Self {
        SetOperand::Typed(set)
    }
}

impl<'a> From<&'a BTreeSet<String>> for SetOperand<'a> {
    fn from(set: &'a BTreeSet<String>) -> Self {
        SetOperand::Plain(set)
    }
}

impl SetLangString {
    /// Create a SetLangString validated against the process-wide flags.
    pub fn new<I, S>(texts: I, lang: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_flags(texts, lang, &Controller::flags())
    }

    /// Create a SetLangString validated against explicit flags.
    ///
    /// Every element passes the same text gates as a LangString text.
    pub fn with_flags<I, S>(texts: I, lang: impl Into<String>, flags: &Flags) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let normalizer = Normalizer::new(flags, Namespace::SetLangString);
        let lang = normalizer.lang(lang)?;
        let texts = texts
            .into_iter()
            .map(|text| normalizer.text(text))
            .collect::<Result<BTreeSet<String>>>()?;
        Ok(Self {
            texts,
            lang,
            flags: *flags,
        })
    }

    /// An empty set in `lang`.
    pub fn empty(lang: impl Into<String>) -> Result<Self> {
        Self::new(Vec::<String>::new(), lang)
    }

    /// Assemble from parts that were already validated.
    pub(crate) fn from_parts(texts: BTreeSet<String>, lang: String, flags: Flags) -> Self {
        Self { texts, lang, flags }
    }

    pub fn texts(&self) -> &BTreeSet<String> {
        &self.texts
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Replace the flags used by later mutations and rendering.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.texts.iter()
    }

    pub fn into_texts(self) -> BTreeSet<String> {
        self.texts
    }

    fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.flags, Namespace::SetLangString)
    }

    fn strict(&self) -> bool {
        self.flags
            .is_enabled(Namespace::SetLangString, FlagName::MethodsMatchTypes)
    }

    fn ensure_lang(&self, lang: &str) -> Result<()> {
        if same_lang(&self.lang, lang) {
            Ok(())
        } else {
            Err(Error::incompatible(&self.lang, lang))
        }
    }

    fn derive(&self, texts: BTreeSet<String>) -> Self {
        Self {
            texts,
            lang: self.lang.clone(),
            flags: self.flags,
        }
    }

    // ==================== Containment ====================

    pub fn contains_text(&self, text: &str) -> bool {
        self.texts.contains(text)
    }

    /// Whether `langstring`'s text is a member; its lang must match.
    pub fn contains_langstring(&self, langstring: &LangString) -> Result<bool> {
        self.ensure_lang(langstring.lang())?;
        Ok(self.contains_text(langstring.text()))
    }

    pub fn contains<'a>(&self, member: impl Into<SetMember<'a>>) -> Result<bool> {
        match member.into() {
            SetMember::Text(text) => Ok(self.contains_text(text)),
            SetMember::LangString(langstring) => self.contains_langstring(langstring),
        }
    }

    // ==================== Mutators ====================

    pub fn add<'a>(&mut self, member: impl Into<SetMember<'a>>) -> Result<()> {
        match member.into() {
            SetMember::Text(text) => self.add_text(text),
            SetMember::LangString(langstring) => self.add_langstring(langstring),
        }
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = self.normalizer().text(text)?;
        self.texts.insert(text);
        Ok(())
    }

    /// Add a LangString's text. Its lang must match this set's lang.
    pub fn add_langstring(&mut self, langstring: &LangString) -> Result<()> {
        self.ensure_lang(langstring.lang())?;
        self.add_text(langstring.text())
    }

    /// Remove `text` if present.
    pub fn discard_text(&mut self, text: &str) {
        self.texts.remove(text);
    }

    /// Remove `langstring`'s text if present. Its lang must match.
    pub fn discard_langstring(&mut self, langstring: &LangString) -> Result<()> {
        self.ensure_lang(langstring.lang())?;
        self.discard_text(langstring.text());
        Ok(())
    }

    /// Remove `text`, failing with [`Error::TextNotFound`] when absent.
    pub fn remove_text(&mut self, text: &str) -> Result<()> {
        if self.texts.remove(text) {
            Ok(())
        } else {
            Err(Error::TextNotFound(text.to_string()))
        }
    }

    pub fn remove_langstring(&mut self, langstring: &LangString) -> Result<()> {
        self.ensure_lang(langstring.lang())?;
        self.remove_text(langstring.text())
    }

    /// Empty the set; `lang` is kept.
    pub fn clear(&mut self) {
        self.texts.clear();
    }

    // ==================== Set Algebra ====================

    /// Texts of `other` after the language / strict-mode checks.
    fn operand_texts<'a>(
        &self,
        other: SetOperand<'a>,
        operation: &'static str,
    ) -> Result<Cow<'a, BTreeSet<String>>> {
        match other {
            SetOperand::Typed(set) => {
                self.ensure_lang(&set.lang)?;
                Ok(Cow::Borrowed(&set.texts))
            }
            SetOperand::Plain(_) if self.strict() => Err(Error::StrictTypes {
                operation,
                expected: "SetLangString",
                actual: "set",
            }),
            SetOperand::Plain(texts) => {
                let normalizer = self.normalizer();
                let texts = texts
                    .iter()
                    .map(|text| normalizer.text(text.as_str()))
                    .collect::<Result<BTreeSet<String>>>()?;
                Ok(Cow::Owned(texts))
            }
        }
    }

    pub fn union<'a>(&self, other: impl Into<SetOperand<'a>>) -> Result<SetLangString> {
        let other = self.operand_texts(other.into(), "union")?;
        Ok(self.derive(self.texts.union(&other).cloned().collect()))
    }

    pub fn intersection<'a>(&self, other: impl Into<SetOperand<'a>>) -> Result<SetLangString> {
        let other = self.operand_texts(other.into(), "intersection")?;
        Ok(self.derive(self.texts.intersection(&other).cloned().collect()))
    }

    pub fn difference<'a>(&self, other: impl Into<SetOperand<'a>>) -> Result<SetLangString> {
        let other = self.operand_texts(other.into(), "difference")?;
        Ok(self.derive(self.texts.difference(&other).cloned().collect()))
    }

    pub fn symmetric_difference<'a>(
        &self,
        other: impl Into<SetOperand<'a>>,
    ) -> Result<SetLangString> {
        let other = self.operand_texts(other.into(), "symmetric_difference")?;
        Ok(self.derive(self.texts.symmetric_difference(&other).cloned().collect()))
    }

    pub fn union_update<'a>(&mut self, other: impl Into<SetOperand<'a>>) -> Result<()> {
        *self = self.union(other)?;
        Ok(())
    }

    pub fn intersection_update<'a>(&mut self, other: impl Into<SetOperand<'a>>) -> Result<()> {
        *self = self.intersection(other)?;
        Ok(())
    }

    pub fn difference_update<'a>(&mut self, other: impl Into<SetOperand<'a>>) -> Result<()> {
        *self = self.difference(other)?;
        Ok(())
    }

    pub fn symmetric_difference_update<'a>(
        &mut self,
        other: impl Into<SetOperand<'a>>,
    ) -> Result<()> {
        *self = self.symmetric_difference(other)?;
        Ok(())
    }

    pub fn is_disjoint<'a>(&self, other: impl Into<SetOperand<'a>>) -> Result<bool> {
        let other = self.operand_texts(other.into(), "is_disjoint")?;
        Ok(self.texts.is_disjoint(&other))
    }

    pub fn is_subset<'a>(&self, other: impl Into<SetOperand<'a>>) -> Result<bool> {
        let other = self.operand_texts(other.into(), "is_subset")?;
        Ok(self.texts.is_subset(&other))
    }

    pub fn is_superset<'a>(&self, other: impl Into<SetOperand<'a>>) -> Result<bool> {
        let other = self.operand_texts(other.into(), "is_superset")?;
        Ok(self.texts.is_superset(&other))
    }

    // ==================== Projections ====================

    /// One LangString per member, sharing this set's lang.
    pub fn to_langstrings(&self) -> Vec<LangString> {
        self.texts
            .iter()
            .map(|text| LangString::from_parts(text.clone(), self.lang.clone(), self.flags))
            .collect()
    }

    /// One rendered string per member; `None` uses this set's PRINT_* flags.
    pub fn to_strings(&self, options: Option<&RenderOptions>) -> Vec<String> {
        let options = options.cloned().unwrap_or_else(|| self.render_options());
        self.texts
            .iter()
            .map(|text| options.entry(text, &self.lang))
            .collect()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from_flags(&self.flags, Namespace::SetLangString)
    }

    pub fn to_string_with(&self, options: &RenderOptions) -> String {
        options.set(&self.texts, &self.lang)
    }

    /// Union sets that share a language, keeping first-seen order.
    ///
    /// When the merged sets spell their language differently, the result
    /// carries the casefolded language.
    pub fn merge_setlangstrings(sets: &[SetLangString]) -> Vec<SetLangString> {
        let mut merged: Vec<SetLangString> = Vec::new();
        for set in sets {
            match merged.iter_mut().find(|kept| same_lang(&kept.lang, &set.lang)) {
                Some(kept) => {
                    if kept.lang != set.lang {
                        kept.lang = casefold(&kept.lang);
                    }
                    kept.texts.extend(set.texts.iter().cloned());
                }
                None => merged.push(set.clone()),
            }
        }
        merged
    }
}

impl PartialEq for SetLangString {
    fn eq(&self, other: &Self) -> bool {
        self.texts == other.texts && same_lang(&self.lang, &other.lang)
    }
}

impl Eq for SetLangString {}

impl Hash for SetLangString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.texts.hash(state);
        casefold(&self.lang).hash(state);
    }
}

/// Subset ordering; sets in different languages are unordered.
impl PartialOrd for SetLangString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !same_lang(&self.lang, &other.lang) {
            return None;
        }
        if self.texts == other.texts {
            Some(Ordering::Equal)
        } else if self.texts.is_subset(&other.texts) {
            Some(Ordering::Less)
        } else if self.texts.is_superset(&other.texts) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl fmt::Display for SetLangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&self.render_options()))
    }
}

impl<'a> IntoIterator for &'a SetLangString {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.texts.iter()
    }
}

impl BitOr<&SetLangString> for &SetLangString {
    type Output = Result<SetLangString>;

    fn bitor(self, rhs: &SetLangString) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd<&SetLangString> for &SetLangString {
    type Output = Result<SetLangString>;

    fn bitand(self, rhs: &SetLangString) -> Self::Output {
        self.intersection(rhs)
    }
}

impl Sub<&SetLangString> for &SetLangString {
    type Output = Result<SetLangString>;

    fn sub(self, rhs: &SetLangString) -> Self::Output {
        self.difference(rhs)
    }
}

impl BitXor<&SetLangString> for &SetLangString {
    type Output = Result<SetLangString>;

    fn bitxor(self, rhs: &SetLangString) -> Self::Output {
        self.symmetric_difference(rhs)
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

    fn sls(texts: &[&str], lang: &str) -> SetLangString {
        SetLangString::with_flags(texts.iter().copied(), lang, &Flags::new())
            .expect("valid setlangstring")
    }

    fn ls(text: &str, lang: &str) -> LangString {
        LangString::with_flags(text, lang, &Flags::new()).expect("valid langstring")
    }

    fn plain(texts: &[&str]) -> BTreeSet<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn strict_flags() -> Flags {
        Flags::new().with(Flag::set_lang_string(FlagName::MethodsMatchTypes), true)
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_elements_are_case_sensitive() {
        assert_eq!(sls(&["a", "A"], "en").len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(sls(&["a", "a", "b"], "en").len(), 2);
    }

    #[test]
    fn test_construction_gates_apply_to_every_element() {
        let flags = Flags::new()
            .with(Flag::set_lang_string(FlagName::StripText), true)
            .with(Flag::set_lang_string(FlagName::EnsureText), true);

        let set = SetLangString::with_flags([" a ", "b"], "en", &flags).unwrap();
        assert!(set.contains_text("a"));

        let err = SetLangString::with_flags(["a", "  "], "en", &flags).unwrap_err();
        assert_eq!(err, Error::EmptyText { owner: "SetLangString" });
    }

    #[test]
    fn test_construction_lang_gates() {
        let flags = Flags::new()
            .with(Flag::set_lang_string(FlagName::LowercaseLang), true)
            .with(Flag::set_lang_string(FlagName::EnsureValidLang), true);
        assert_eq!(SetLangString::with_flags(["x"], "PT-BR", &flags).unwrap().lang(), "pt-br");
        assert!(SetLangString::with_flags(["x"], "p_t", &flags).is_err());
    }

    // ==================== Containment Tests ====================

    #[test]
    fn test_contains_text_and_langstring() {
        let set = sls(&["Hi", "Yo"], "en");
        assert!(set.contains_text("Hi"));
        assert!(!set.contains_text("hi"));
        assert!(set.contains_langstring(&ls("Yo", "EN")).unwrap());
        assert!(set.contains(&ls("Hi", "en")).unwrap());
        assert!(set.contains("Yo").unwrap());

        let err = set.contains_langstring(&ls("Hi", "fr")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    // ==================== Mutator Tests ====================

    #[test]
    fn test_add_variants() {
        let mut set = sls(&[], "en");
        set.add("a").unwrap();
        set.add_text("b").unwrap();
        set.add_langstring(&ls("c", "EN")).unwrap();
        set.add(&ls("d", "en")).unwrap();
        assert_eq!(set.texts(), &plain(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_add_langstring_other_lang_fails() {
        let mut set = sls(&["a"], "en");
        let err = set.add_langstring(&ls("b", "de")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_text_applies_gates() {
        let flags = Flags::new().with(Flag::global(FlagName::EnsureText), true);
        let mut set = SetLangString::with_flags(["a"], "en", &flags).unwrap();
        assert!(set.add_text("").is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_discard_is_silent() {
        let mut set = sls(&["a"], "en");
        set.discard_text("zzz");
        set.discard_langstring(&ls("zzz", "en")).unwrap();
        set.discard_text("a");
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_missing_is_key_error() {
        let mut set = sls(&["a"], "en");
        let err = set.remove_text("b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);

        let err = set.remove_langstring(&ls("b", "en")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);

        set.remove_langstring(&ls("a", "EN")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_clear_keeps_lang() {
        let mut set = sls(&["a", "b"], "en");
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.lang(), "en");
    }

    // ==================== Set Algebra Tests ====================

    #[test]
    fn test_algebra_with_typed_sets() {
        let a = sls(&["1", "2", "3"], "en");
        let b = sls(&["2", "3", "4"], "EN");

        assert_eq!(a.union(&b).unwrap(), sls(&["1", "2", "3", "4"], "en"));
        assert_eq!(a.intersection(&b).unwrap(), sls(&["2", "3"], "en"));
        assert_eq!(a.difference(&b).unwrap(), sls(&["1"], "en"));
        assert_eq!(a.symmetric_difference(&b).unwrap(), sls(&["1", "4"], "en"));

        assert_eq!((&a | &b).unwrap().len(), 4);
        assert_eq!((&a & &b).unwrap().len(), 2);
        assert_eq!((&a - &b).unwrap().len(), 1);
        assert_eq!((&a ^ &b).unwrap().len(), 2);
    }

    #[test]
    fn test_algebra_requires_same_lang() {
        let a = sls(&["1"], "en");
        let b = sls(&["1"], "fr");
        assert_eq!(a.union(&b).unwrap_err().kind(), ErrorKind::Value);
        assert!((&a & &b).is_err());
        assert!(a.is_subset(&b).is_err());
    }

    #[test]
    fn test_algebra_with_plain_sets() {
        let a = sls(&["1", "2"], "en");
        let other = plain(&["2", "3"]);
        assert_eq!(a.union(&other).unwrap().len(), 3);
        assert!(!a.is_disjoint(&other).unwrap());
        assert!(a.is_superset(&plain(&["1"])).unwrap());
    }

    #[test]
    fn test_strict_mode_rejects_plain_sets() {
        let a = SetLangString::with_flags(["1"], "en", &strict_flags()).unwrap();
        let err = a.union(&plain(&["2"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let b = SetLangString::with_flags(["2"], "en", &strict_flags()).unwrap();
        assert_eq!(a.union(&b).unwrap().len(), 2);
    }

    #[test]
    fn test_update_variants() {
        let mut a = sls(&["1", "2"], "en");
        a.union_update(&sls(&["3"], "en")).unwrap();
        assert_eq!(a.len(), 3);
        a.intersection_update(&plain(&["1", "3"])).unwrap();
        assert_eq!(a.texts(), &plain(&["1", "3"]));
        a.difference_update(&plain(&["1"])).unwrap();
        assert_eq!(a.texts(), &plain(&["3"]));
        a.symmetric_difference_update(&plain(&["3", "4"])).unwrap();
        assert_eq!(a.texts(), &plain(&["4"]));

        let before = a.clone();
        assert!(a.union_update(&sls(&["x"], "de")).is_err());
        assert_eq!(a, before);
    }

    #[test]
    fn test_subset_ordering() {
        let small = sls(&["1"], "en");
        let big = sls(&["1", "2"], "en");
        assert!(small < big);
        assert!(big > small);
        assert!(small <= small.clone());
        assert_eq!(sls(&["1"], "en").partial_cmp(&sls(&["2"], "en")), None);
        assert_eq!(small.partial_cmp(&sls(&["1", "2"], "fr")), None);
    }

    // ==================== Equality Tests ====================

    #[test]
    fn test_equality_and_hash() {
        let a = sls(&["x", "y"], "en");
        let b = sls(&["y", "x"], "EN");
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());

        assert_ne!(a, sls(&["X", "y"], "en"));
    }

    // ==================== Projection Tests ====================

    #[test]
    fn test_to_langstrings() {
        let set = sls(&["a", "b"], "en");
        let langstrings = set.to_langstrings();
        assert_eq!(langstrings, vec![ls("a", "en"), ls("b", "en")]);
    }

    #[test]
    fn test_to_strings_and_display() {
        let set = sls(&["b", "a"], "en");
        assert_eq!(set.to_strings(None), vec!["\"a\"@en", "\"b\"@en"]);
        assert_eq!(set.to_string(), "{\"a\", \"b\"}@en");

        let opts = RenderOptions {
            print_quotes: false,
            ..RenderOptions::default()
        };
        assert_eq!(set.to_string_with(&opts), "{a, b}@en");
        assert_eq!(set.to_strings(Some(&opts)), vec!["a@en", "b@en"]);
    }

    #[test]
    fn test_display_follows_flags() {
        let flags = Flags::new().with(Flag::set_lang_string(FlagName::PrintWithLang), false);
        let set = SetLangString::with_flags(["a"], "en", &flags).unwrap();
        assert_eq!(set.to_string(), "{\"a\"}");
    }

    #[test]
    fn test_merge_setlangstrings() {
        let merged = SetLangString::merge_setlangstrings(&[
            sls(&["a"], "EN"),
            sls(&["b"], "fr"),
            sls(&["c"], "en"),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].lang(), "en");
        assert_eq!(merged[0].texts(), &plain(&["a", "c"]));
        assert_eq!(merged[1], sls(&["b"], "fr"));
    }

    // ==================== Serde Tests ====================

    #[test]
    #[serial]
    fn test_serde_round_trip() {
        let set = sls(&["b", "a"], "en");
        let json = serde_json::to_string(&set).expect("Should serialize");
        assert_eq!(json, r#"{"texts":["a","b"],"lang":"en"}"#);
        let restored: SetLangString = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(restored, set);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_add_then_contains(texts in proptest::collection::vec("\\PC{0,8}", 0..6), x in "\\PC{0,8}") {
            let mut set = SetLangString::with_flags(texts, "en", &Flags::new()).unwrap();
            set.add_text(x.clone()).unwrap();
            prop_assert!(set.contains_text(&x));
        }
    }
}
