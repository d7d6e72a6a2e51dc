//! MultiLangString: texts grouped by language.
//!
//! Keys keep the spelling used on first insertion (or are casefolded when
//! LOWERCASE_LANG is enabled) but are looked up case-insensitively through a
//! secondary casefolded-key index. A language may map to an empty set; the
//! `clean_empty` argument of the removal methods decides whether a language
//! emptied by the removal is pruned.
//!
//! `pref_lang` only drives the `*_pref_lang` helpers. It is not part of
//! equality or hashing, and neither are the captured flags.

use crate::error::{Error, Result};
use crate::flags::{Controller, Flags, Namespace};
use crate::langstring::LangString;
use crate::normalize::{casefold, Normalizer};
use crate::render::RenderOptions;
use crate::setlangstring::SetLangString;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

pub const DEFAULT_PREF_LANG: &str = "en";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMultiLangString")]
pub struct MultiLangString {
    mls_dict: BTreeMap<String, BTreeSet<String>>,
    pref_lang: String,
    /// casefolded lang -> key stored in `mls_dict`
    #[serde(skip)]
    index: HashMap<String, String>,
    #[serde(skip)]
    flags: Flags,
}

#[derive(Deserialize)]
struct RawMultiLangString {
    #[serde(default)]
    mls_dict: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_pref_lang")]
    pref_lang: String,
}

fn default_pref_lang() -> String {
    DEFAULT_PREF_LANG.to_string()
}

impl TryFrom<RawMultiLangString> for MultiLangString {
    type Error = Error;

    fn try_from(raw: RawMultiLangString) -> Result<Self> {
        MultiLangString::new(raw.mls_dict, raw.pref_lang)
    }
}

/// Anything that can be added to, removed from, or looked up in a MultiLangString.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    /// `(text, lang)`
    Pair(&'a str, &'a str),
    LangString(&'a LangString),
    SetLangString(&'a SetLangString),
    MultiLangString(&'a MultiLangString),
}

impl<'a> From<(&'a str, &'a str)> for Entry<'a> {
    fn from((text, lang): (&'a str, &'a str)) -> Self {
        Entry::Pair(text, lang)
    }
}

impl<'a> From<&'a LangString> for Entry<'a> {
    fn from(langstring: &'a LangString) -> Self {
        Entry::LangString(langstring)
    }
}

impl<'a> From<&'a SetLangString> for Entry<'a> {
    fn from(set: &'a SetLangString) -> Self {
        Entry::SetLangString(set)
    }
}

impl<'a> From<&'a MultiLangString> for Entry<'a> {
    fn from(mls: &'a MultiLangString) -> Self {
        Entry::MultiLangString(mls)
    }
}

impl MultiLangString {
    /// Create from a `lang -> texts` mapping, validated against the process-wide flags.
    pub fn new<I, K, S, T>(mls_dict: I, pref_lang: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::with_flags(mls_dict, pref_lang, &Controller::flags())
    }

    /// Create from a `lang -> texts` mapping, validated against explicit flags.
    ///
    /// Keys that differ only by case are merged into the first spelling.
    pub fn with_flags<I, K, S, T>(
        mls_dict: I,
        pref_lang: impl Into<String>,
        flags: &Flags,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut mls = Self::empty(flags);
        mls.pref_lang = pref_lang.into();
        for (lang, texts) in mls_dict {
            let (lang, texts) = mls.normalize(lang, texts)?;
            mls.insert_texts(lang, texts);
        }
        Ok(mls)
    }

    /// No languages, `pref_lang = "en"`.
    pub fn empty(flags: &Flags) -> Self {
        Self {
            mls_dict: BTreeMap::new(),
            pref_lang: DEFAULT_PREF_LANG.to_string(),
            index: HashMap::new(),
            flags: *flags,
        }
    }

    pub fn mls_dict(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.mls_dict
    }

    pub fn pref_lang(&self) -> &str {
        &self.pref_lang
    }

    pub fn set_pref_lang(&mut self, pref_lang: impl Into<String>) {
        self.pref_lang = pref_lang.into();
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Replace the flags used by later mutations and rendering.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.mls_dict.iter()
    }

    /// Stored language keys, in key order.
    pub fn langs(&self) -> impl Iterator<Item = &String> {
        self.mls_dict.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.mls_dict.is_empty()
    }

    // ==================== Internals ====================

    fn normalizer(&self) -> Normalizer<'_> {
        Normalizer::new(&self.flags, Namespace::MultiLangString)
    }

    fn normalize<K, S, T>(&self, lang: K, texts: S) -> Result<(String, Vec<String>)>
    where
        K: Into<String>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let normalizer = self.normalizer();
        let lang = normalizer.lang(lang)?;
        let texts = texts
            .into_iter()
            .map(|text| normalizer.text(text))
            .collect::<Result<Vec<String>>>()?;
        Ok((lang, texts))
    }

    /// Stored key for `lang`, whatever its case.
    fn resolve(&self, lang: &str) -> Option<&str> {
        self.index.get(&casefold(lang)).map(String::as_str)
    }

    fn texts_of(&self, lang: &str) -> Option<&BTreeSet<String>> {
        self.resolve(lang).and_then(|key| self.mls_dict.get(key))
    }

    fn texts_of_mut(&mut self, lang: &str) -> Option<&mut BTreeSet<String>> {
        let key = self.index.get(&casefold(lang))?;
        self.mls_dict.get_mut(key)
    }

    /// Insert already validated texts, creating the language if needed.
    fn insert_texts(&mut self, lang: String, texts: impl IntoIterator<Item = String>) {
        let key = self
            .index
            .entry(casefold(&lang))
            .or_insert_with(|| lang.clone())
            .clone();
        self.mls_dict.entry(key).or_default().extend(texts);
    }

    fn delete_lang(&mut self, lang: &str) -> bool {
        match self.index.remove(&casefold(lang)) {
            Some(key) => {
                self.mls_dict.remove(&key);
                true
            }
            None => false,
        }
    }

    fn prune_if_empty(&mut self, lang: &str, clean_empty: bool) {
        if clean_empty && self.texts_of(lang).is_some_and(BTreeSet::is_empty) {
            self.delete_lang(lang);
            debug!("Pruned empty language '{}'", lang);
        }
    }

    fn langstring(&self, text: &str, lang: &str) -> LangString {
        LangString::from_parts(text.to_string(), lang.to_string(), self.flags)
    }

    fn selected<'a>(
        &'a self,
        langs: Option<&'a [&'a str]>,
    ) -> Box<dyn Iterator<Item = (&'a String, &'a BTreeSet<String>)> + 'a> {
        match langs {
            None => Box::new(self.mls_dict.iter()),
            Some(langs) => {
                let wanted: BTreeSet<String> = langs.iter().map(|lang| casefold(lang)).collect();
                Box::new(
                    self.mls_dict
                        .iter()
                        .filter(move |(lang, _)| wanted.contains(&casefold(lang))),
                )
            }
        }
    }

    // ==================== Adders ====================

    /// Add any [`Entry`]: a `(text, lang)` pair, LangString, SetLangString or MultiLangString.
    pub fn add<'a>(&mut self, entry: impl Into<Entry<'a>>) -> Result<()> {
        match entry.into() {
            Entry::Pair(text, lang) => self.add_entry(text, lang),
            Entry::LangString(langstring) => self.add_langstring(langstring),
            Entry::SetLangString(set) => self.add_setlangstring(set),
            Entry::MultiLangString(mls) => self.add_multilangstring(mls),
        }
    }

    pub fn add_entry(&mut self, text: impl Into<String>, lang: impl Into<String>) -> Result<()> {
        let (lang, texts) = self.normalize(lang, [text])?;
        self.insert_texts(lang, texts);
        Ok(())
    }

    pub fn add_text_in_pref_lang(&mut self, text: impl Into<String>) -> Result<()> {
        let lang = self.pref_lang.clone();
        self.add_entry(text, lang)
    }

    pub fn add_langstring(&mut self, langstring: &LangString) -> Result<()> {
        self.add_entry(langstring.text(), langstring.lang())
    }

    /// Merge a set's texts; an empty set still registers its language.
    pub fn add_setlangstring(&mut self, set: &SetLangString) -> Result<()> {
        let (lang, texts) = self.normalize(set.lang(), set.iter().map(String::as_str))?;
        self.insert_texts(lang, texts);
        Ok(())
    }

    /// Merge every language of `other` (set union per language).
    pub fn add_multilangstring(&mut self, other: &MultiLangString) -> Result<()> {
        let entries = other
            .iter()
            .map(|(lang, texts)| self.normalize(lang.as_str(), texts.iter().map(String::as_str)))
            .collect::<Result<Vec<_>>>()?;
        for (lang, texts) in entries {
            self.insert_texts(lang, texts);
        }
        Ok(())
    }

    /// Register `lang` with no texts (no-op if already present).
    pub fn add_empty_lang(&mut self, lang: impl Into<String>) -> Result<()> {
        let (lang, texts) = self.normalize(lang, Vec::<String>::new())?;
        self.insert_texts(lang, texts);
        Ok(())
    }

    // ==================== Discard (silent on absence) ====================

    pub fn discard<'a>(&mut self, entry: impl Into<Entry<'a>>, clean_empty: bool) {
        match entry.into() {
            Entry::Pair(text, lang) => self.discard_entry(text, lang, clean_empty),
            Entry::LangString(langstring) => self.discard_langstring(langstring, clean_empty),
            Entry::SetLangString(set) => self.discard_setlangstring(set, clean_empty),
            Entry::MultiLangString(mls) => self.discard_multilangstring(mls, clean_empty),
        }
    }

    pub fn discard_entry(&mut self, text: &str, lang: &str, clean_empty: bool) {
        let removed = self
            .texts_of_mut(lang)
            .is_some_and(|texts| texts.remove(text));
        if removed {
            self.prune_if_empty(lang, clean_empty);
        }
    }

    pub fn discard_text_in_pref_lang(&mut self, text: &str, clean_empty: bool) {
        let lang = self.pref_lang.clone();
        self.discard_entry(text, &lang, clean_empty);
    }

    pub fn discard_langstring(&mut self, langstring: &LangString, clean_empty: bool) {
        self.discard_entry(langstring.text(), langstring.lang(), clean_empty);
    }

    pub fn discard_setlangstring(&mut self, set: &SetLangString, clean_empty: bool) {
        for text in set {
            self.discard_entry(text, set.lang(), clean_empty);
        }
    }

    pub fn discard_multilangstring(&mut self, other: &MultiLangString, clean_empty: bool) {
        for (lang, texts) in other.iter() {
            for text in texts {
                self.discard_entry(text, lang, clean_empty);
            }
        }
    }

    /// Drop `lang` and all its texts, if present.
    pub fn discard_lang(&mut self, lang: &str) {
        self.delete_lang(lang);
    }

    // ==================== Remove (error on absence) ====================

    pub fn remove<'a>(&mut self, entry: impl Into<Entry<'a>>, clean_empty: bool) -> Result<()> {
        match entry.into() {
            Entry::Pair(text, lang) => self.remove_entry(text, lang, clean_empty),
            Entry::LangString(langstring) => self.remove_langstring(langstring, clean_empty),
            Entry::SetLangString(set) => self.remove_setlangstring(set, clean_empty),
            Entry::MultiLangString(mls) => self.remove_multilangstring(mls, clean_empty),
        }
    }

    fn ensure_entry(&self, text: &str, lang: &str) -> Result<()> {
        if self.contains_entry(text, lang) {
            Ok(())
        } else {
            Err(Error::EntryNotFound {
                text: text.to_string(),
                lang: lang.to_string(),
            })
        }
    }

    fn ensure_lang(&self, lang: &str) -> Result<()> {
        if self.contains_lang(lang) {
            Ok(())
        } else {
            Err(Error::LangNotFound(lang.to_string()))
        }
    }

    pub fn remove_entry(&mut self, text: &str, lang: &str, clean_empty: bool) -> Result<()> {
        self.ensure_entry(text, lang)?;
        self.discard_entry(text, lang, clean_empty);
        Ok(())
    }

    pub fn remove_text_in_pref_lang(&mut self, text: &str, clean_empty: bool) -> Result<()> {
        let lang = self.pref_lang.clone();
        self.remove_entry(text, &lang, clean_empty)
    }

    pub fn remove_langstring(&mut self, langstring: &LangString, clean_empty: bool) -> Result<()> {
        self.remove_entry(langstring.text(), langstring.lang(), clean_empty)
    }

    /// Remove every text of `set`; nothing changes unless all are present.
    pub fn remove_setlangstring(&mut self, set: &SetLangString, clean_empty: bool) -> Result<()> {
        self.ensure_lang(set.lang())?;
        for text in set {
            self.ensure_entry(text, set.lang())?;
        }
        self.discard_setlangstring(set, clean_empty);
        Ok(())
    }

    /// Remove every entry of `other`; nothing changes unless all are present.
    pub fn remove_multilangstring(
        &mut self,
        other: &MultiLangString,
        clean_empty: bool,
    ) -> Result<()> {
        for (lang, texts) in other.iter() {
            self.ensure_lang(lang)?;
            for text in texts {
                self.ensure_entry(text, lang)?;
            }
        }
        self.discard_multilangstring(other, clean_empty);
        Ok(())
    }

    pub fn remove_lang(&mut self, lang: &str) -> Result<()> {
        self.ensure_lang(lang)?;
        self.delete_lang(lang);
        Ok(())
    }

    /// Drop every language whose text set is empty.
    pub fn remove_empty_langs(&mut self) {
        let empty: Vec<String> = self
            .mls_dict
            .iter()
            .filter(|(_, texts)| texts.is_empty())
            .map(|(lang, _)| lang.clone())
            .collect();
        for lang in empty {
            self.delete_lang(&lang);
        }
    }

    // ==================== Counting ====================

    pub fn count_entries_of_lang(&self, lang: &str) -> usize {
        self.texts_of(lang).map_or(0, BTreeSet::len)
    }

    pub fn count_entries_per_lang(&self) -> BTreeMap<String, usize> {
        self.mls_dict
            .iter()
            .map(|(lang, texts)| (lang.clone(), texts.len()))
            .collect()
    }

    pub fn count_entries_total(&self) -> usize {
        self.mls_dict.values().map(BTreeSet::len).sum()
    }

    pub fn count_langs_total(&self) -> usize {
        self.mls_dict.len()
    }

    // ==================== Getters ====================

    /// Stored language keys, optionally casefolded.
    pub fn get_langs(&self, casefold_langs: bool) -> Vec<String> {
        self.mls_dict
            .keys()
            .map(|lang| if casefold_langs { casefold(lang) } else { lang.clone() })
            .collect()
    }

    /// Every text of every language, in `(lang, text)` order.
    pub fn get_texts(&self) -> Vec<String> {
        self.mls_dict.values().flatten().cloned().collect()
    }

    /// Texts of `lang` as a SetLangString; empty when the language is absent.
    pub fn get_setlangstring(&self, lang: &str) -> SetLangString {
        let (key, texts) = match self.resolve(lang) {
            Some(key) => (key.to_string(), self.mls_dict[key].clone()),
            None => (lang.to_string(), BTreeSet::new()),
        };
        SetLangString::from_parts(texts, key, self.flags)
    }

    /// Point lookup; fails with [`Error::EntryNotFound`] when absent.
    pub fn get_langstring(&self, text: &str, lang: &str) -> Result<LangString> {
        self.ensure_entry(text, lang)?;
        let key = self.resolve(lang).unwrap_or(lang);
        Ok(self.langstring(text, key))
    }

    /// A copy restricted to `langs` (absent languages are ignored).
    pub fn get_multilangstring(&self, langs: &[&str]) -> MultiLangString {
        let mut subset = Self::empty(&self.flags);
        subset.pref_lang = self.pref_lang.clone();
        for (lang, texts) in self.selected(Some(langs)) {
            subset.insert_texts(lang.clone(), texts.iter().cloned());
        }
        subset
    }

    pub fn get_strings_lang(&self, lang: &str) -> Vec<String> {
        self.texts_of(lang)
            .map(|texts| texts.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_strings_pref_lang(&self) -> Vec<String> {
        self.get_strings_lang(&self.pref_lang)
    }

    pub fn get_strings_all(&self) -> Vec<String> {
        self.get_texts()
    }

    /// Rendered `"text"@lang` strings for `lang`.
    pub fn get_strings_langstring_lang(&self, lang: &str) -> Vec<String> {
        self.to_strings(Some(&[lang]), None)
    }

    pub fn get_strings_langstring_pref_lang(&self) -> Vec<String> {
        self.get_strings_langstring_lang(&self.pref_lang)
    }

    pub fn get_strings_langstring_all(&self) -> Vec<String> {
        self.to_strings(None, None)
    }

    pub fn get_langstrings_lang(&self, lang: &str) -> Vec<LangString> {
        self.to_langstrings(Some(&[lang]))
    }

    pub fn get_langstrings_pref_lang(&self) -> Vec<LangString> {
        self.get_langstrings_lang(&self.pref_lang)
    }

    pub fn get_langstrings_all(&self) -> Vec<LangString> {
        self.to_langstrings(None)
    }

    pub fn has_pref_lang_entries(&self) -> bool {
        self.count_entries_of_lang(&self.pref_lang) > 0
    }

    // ==================== Projections ====================

    /// One LangString per `(lang, text)`, optionally restricted to `langs`.
    pub fn to_langstrings(&self, langs: Option<&[&str]>) -> Vec<LangString> {
        self.selected(langs)
            .flat_map(|(lang, texts)| texts.iter().map(move |text| self.langstring(text, lang)))
            .collect()
    }

    /// One SetLangString per language, optionally restricted to `langs`.
    pub fn to_setlangstrings(&self, langs: Option<&[&str]>) -> Vec<SetLangString> {
        self.selected(langs)
            .map(|(lang, texts)| SetLangString::from_parts(texts.clone(), lang.clone(), self.flags))
            .collect()
    }

    /// Rendered entries; `None` options use this value's PRINT_* flags.
    pub fn to_strings(&self, langs: Option<&[&str]>, options: Option<&RenderOptions>) -> Vec<String> {
        let options = options.cloned().unwrap_or_else(|| self.render_options());
        self.selected(langs)
            .flat_map(|(lang, texts)| texts.iter().map(move |text| (lang, text)))
            .map(|(lang, text)| options.entry(text, lang))
            .collect()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from_flags(&self.flags, Namespace::MultiLangString)
    }

    pub fn to_string_with(&self, options: &RenderOptions) -> String {
        self.to_strings(None, Some(options)).join(", ")
    }

    // ==================== Containment ====================

    pub fn contains<'a>(&self, entry: impl Into<Entry<'a>>) -> bool {
        match entry.into() {
            Entry::Pair(text, lang) => self.contains_entry(text, lang),
            Entry::LangString(langstring) => self.contains_langstring(langstring),
            Entry::SetLangString(set) => self.contains_setlangstring(set),
            Entry::MultiLangString(mls) => self.contains_multilangstring(mls),
        }
    }

    pub fn contains_entry(&self, text: &str, lang: &str) -> bool {
        self.texts_of(lang).is_some_and(|texts| texts.contains(text))
    }

    pub fn contains_lang(&self, lang: &str) -> bool {
        self.resolve(lang).is_some()
    }

    pub fn contains_text_in_pref_lang(&self, text: &str) -> bool {
        self.contains_entry(text, &self.pref_lang)
    }

    pub fn contains_text_in_any_lang(&self, text: &str) -> bool {
        self.mls_dict.values().any(|texts| texts.contains(text))
    }

    pub fn contains_langstring(&self, langstring: &LangString) -> bool {
        self.contains_entry(langstring.text(), langstring.lang())
    }

    /// The language is present and holds every text of `set`.
    pub fn contains_setlangstring(&self, set: &SetLangString) -> bool {
        self.texts_of(set.lang())
            .is_some_and(|texts| set.texts().is_subset(texts))
    }

    /// Every language of `other` is present and holds all of its texts.
    pub fn contains_multilangstring(&self, other: &MultiLangString) -> bool {
        other.iter().all(|(lang, wanted)| {
            self.texts_of(lang)
                .is_some_and(|texts| wanted.is_subset(texts))
        })
    }

    // ==================== Merging ====================

    /// Union of all `values`, keeping the first one's `pref_lang` and flags.
    pub fn merge_multilangstrings(values: &[MultiLangString]) -> Result<MultiLangString> {
        let mut values = values.iter();
        let mut merged = match values.next() {
            Some(first) => first.clone(),
            None => return Ok(Self::default()),
        };
        for value in values {
            merged.add_multilangstring(value)?;
        }
        Ok(merged)
    }
}

impl Default for MultiLangString {
    fn default() -> Self {
        Self::empty(&Controller::flags())
    }
}

impl PartialEq for MultiLangString {
    fn eq(&self, other: &Self) -> bool {
        self.mls_dict.len() == other.mls_dict.len()
            && self
                .mls_dict
                .iter()
                .all(|(lang, texts)| other.texts_of(lang) == Some(texts))
    }
}

impl Eq for MultiLangString {}

impl Hash for MultiLangString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let folded: BTreeMap<String, &BTreeSet<String>> = self
            .mls_dict
            .iter()
            .map(|(lang, texts)| (casefold(lang), texts))
            .collect();
        folded.hash(state);
    }
}

impl fmt::Display for MultiLangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&self.render_options()))
    }
}
