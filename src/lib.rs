//! Language-tagged text values with configurable validation.
//!
//! # Architecture
//!
//! - `flags`: process-wide and injectable boolean configuration
//! - `langstring`: one text in one language
//! - `setlangstring`: a set of texts sharing one language
//! - `multilangstring`: texts grouped by language
//! - `converter`: conversions between plain strings and the typed values
//!
//! # Example
//!
//! ```rust
//! use langstring::{Converter, MultiLangString};
//!
//! let mut mls = MultiLangString::default();
//! mls.add(("Hello", "en")).unwrap();
//! mls.add(&Converter::from_string_to_langstring_parse("Olá@pt", "@").unwrap()).unwrap();
//! assert_eq!(mls.to_string(), "\"Hello\"@en, \"Olá\"@pt");
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod flags;
pub mod lang_tag;
pub mod langstring;
pub mod multilangstring;
mod normalize;
pub mod render;
pub mod setlangstring;

pub use converter::{ConversionStrategy, Converter};
pub use error::{Error, ErrorKind, Result};
pub use flags::{Controller, Flag, FlagName, Flags, Namespace};
pub use langstring::LangString;
pub use multilangstring::{Entry, MultiLangString};
pub use render::RenderOptions;
pub use setlangstring::{SetLangString, SetMember, SetOperand};
