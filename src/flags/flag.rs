//! Flag identifiers: a flag name qualified by the namespace it configures.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Consumer type a flag applies to.
///
/// Writes to the `Global` namespace fan out to the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Global,
    LangString,
    SetLangString,
    MultiLangString,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Global,
        Namespace::LangString,
        Namespace::SetLangString,
        Namespace::MultiLangString,
    ];

    /// Name used in diagnostics, e.g. `GlobalFlag`.
    pub fn enum_name(self) -> &'static str {
        match self {
            Namespace::Global => "GlobalFlag",
            Namespace::LangString => "LangStringFlag",
            Namespace::SetLangString => "SetLangStringFlag",
            Namespace::MultiLangString => "MultiLangStringFlag",
        }
    }

    /// Segment used in environment variable keys, e.g. `SETLANGSTRING`.
    pub fn env_segment(self) -> &'static str {
        match self {
            Namespace::Global => "GLOBAL",
            Namespace::LangString => "LANGSTRING",
            Namespace::SetLangString => "SETLANGSTRING",
            Namespace::MultiLangString => "MULTILANGSTRING",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn from_enum_name(name: &str) -> Option<Namespace> {
        Namespace::ALL.into_iter().find(|ns| ns.enum_name() == name)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.enum_name())
    }
}

/// A configuration switch. Every namespace carries the same set of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlagName {
    /// Reject empty `lang` values.
    EnsureAnyLang,
    /// Reject empty text values.
    EnsureText,
    /// Reject `lang` values that are not well-formed language tags.
    EnsureValidLang,
    /// Casefold `lang` values on construction.
    LowercaseLang,
    /// Forbid mixing typed values with plain strings or sets in operations.
    MethodsMatchTypes,
    /// Append the `@lang` suffix when rendering.
    PrintWithLang,
    /// Quote texts when rendering.
    PrintWithQuotes,
    /// Trim surrounding whitespace from `lang` values.
    StripLang,
    /// Trim surrounding whitespace from text values.
    StripText,
}

impl FlagName {
    pub const ALL: [FlagName; 9] = [
        FlagName::EnsureAnyLang,
        FlagName::EnsureText,
        FlagName::EnsureValidLang,
        FlagName::LowercaseLang,
        FlagName::MethodsMatchTypes,
        FlagName::PrintWithLang,
        FlagName::PrintWithQuotes,
        FlagName::StripLang,
        FlagName::StripText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FlagName::EnsureAnyLang => "ENSURE_ANY_LANG",
            FlagName::EnsureText => "ENSURE_TEXT",
            FlagName::EnsureValidLang => "ENSURE_VALID_LANG",
            FlagName::LowercaseLang => "LOWERCASE_LANG",
            FlagName::MethodsMatchTypes => "METHODS_MATCH_TYPES",
            FlagName::PrintWithLang => "PRINT_WITH_LANG",
            FlagName::PrintWithQuotes => "PRINT_WITH_QUOTES",
            FlagName::StripLang => "STRIP_LANG",
            FlagName::StripText => "STRIP_TEXT",
        }
    }

    /// Documented default state.
    pub fn default_state(self) -> bool {
        matches!(self, FlagName::PrintWithLang | FlagName::PrintWithQuotes)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn from_name(name: &str) -> Option<FlagName> {
        FlagName::ALL.into_iter().find(|flag| flag.as_str() == name)
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flag name in a specific namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Flag {
    pub namespace: Namespace,
    pub name: FlagName,
}

impl Flag {
    pub const fn new(namespace: Namespace, name: FlagName) -> Self {
        Self { namespace, name }
    }

    pub const fn global(name: FlagName) -> Self {
        Self::new(Namespace::Global, name)
    }

    pub const fn lang_string(name: FlagName) -> Self {
        Self::new(Namespace::LangString, name)
    }

    pub const fn set_lang_string(name: FlagName) -> Self {
        Self::new(Namespace::SetLangString, name)
    }

    pub const fn multi_lang_string(name: FlagName) -> Self {
        Self::new(Namespace::MultiLangString, name)
    }

    /// Every flag of every namespace.
    pub fn all() -> impl Iterator<Item = Flag> {
        Namespace::ALL.into_iter().flat_map(|namespace| {
            FlagName::ALL
                .into_iter()
                .map(move |name| Flag::new(namespace, name))
        })
    }

    pub fn default_state(self) -> bool {
        self.name.default_state()
    }

    /// Environment variable key for this flag, e.g. `LANGSTRING_GLOBAL_STRIP_TEXT`.
    pub fn env_key(self) -> String {
        format!(
            "{}{}_{}",
            crate::config::ENV_PREFIX,
            self.namespace.env_segment(),
            self.name.as_str()
        )
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace.enum_name(), self.name.as_str())
    }
}

impl FromStr for Flag {
    type Err = Error;

    /// Parse the diagnostic form, e.g. `LangStringFlag.STRIP_TEXT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s.split_once('.').and_then(|(namespace, name)| {
            Some(Flag::new(
                Namespace::from_enum_name(namespace)?,
                FlagName::from_name(name)?,
            ))
        });
        parsed.ok_or_else(|| Error::invalid_argument(&s, "Flag", "str"))
    }
}
