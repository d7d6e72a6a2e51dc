//! Error type shared by every component of the crate.
//!
//! Variants are grouped into three categories (see [`ErrorKind`]): type
//! violations, rejected values, and missing set members.

use thiserror::Error;

/// Coarse category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument of the wrong kind, or operands mixed while strict mode is on.
    Type,
    /// A well-typed value rejected by a validation gate or a precondition.
    Value,
    /// Removal of a text that a set does not hold.
    Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid argument with value '{value}'. Expected '{expected}', but got '{actual}'.")]
    InvalidArgument {
        value: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error(
        "METHODS_MATCH_TYPES enabled: {operation} on '{expected}' does not accept '{actual}' operands."
    )]
    StrictTypes {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("ENSURE_TEXT enabled: {owner} text cannot be empty.")]
    EmptyText { owner: &'static str },

    #[error("ENSURE_ANY_LANG enabled: {owner} lang cannot be empty.")]
    EmptyLang { owner: &'static str },

    #[error("ENSURE_VALID_LANG enabled: {owner} lang '{lang}' is not a valid language tag.")]
    InvalidLang { owner: &'static str, lang: String },

    #[error("Incompatible languages: '{left}' and '{right}'.")]
    IncompatibleLanguages { left: String, right: String },

    #[error("Unknown conversion strategy '{0}'. Expected 'manual' or 'parse'.")]
    UnknownStrategy(String),

    #[error("Entry '{text}'@{lang} not found in MultiLangString.")]
    EntryNotFound { text: String, lang: String },

    #[error("Lang '{0}' not found in MultiLangString.")]
    LangNotFound(String),

    #[error("Text '{0}' not found in SetLangString.")]
    TextNotFound(String),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] from any debug-printable value.
    pub fn invalid_argument(
        value: &impl std::fmt::Debug,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Error::InvalidArgument {
            value: format!("{:?}", value),
            expected,
            actual,
        }
    }

    pub(crate) fn incompatible(left: &str, right: &str) -> Self {
        Error::IncompatibleLanguages {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } | Error::StrictTypes { .. } => ErrorKind::Type,
            Error::EmptyText { .. }
            | Error::EmptyLang { .. }
            | Error::InvalidLang { .. }
            | Error::IncompatibleLanguages { .. }
            | Error::UnknownStrategy(_)
            | Error::EntryNotFound { .. }
            | Error::LangNotFound(_) => ErrorKind::Value,
            Error::TextNotFound(_) => ErrorKind::Key,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
