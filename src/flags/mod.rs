//! Flag registry: boolean configuration namespaced by consumer type.
//!
//! # Architecture
//!
//! - `flag`: identifiers (`Namespace`, `FlagName`, `Flag`)
//! - `registry`: the `Flags` configuration value, injectable into every constructor
//! - `controller`: the process-wide `Controller` singleton wrapping one `Flags`
//!
//! # Example
//!
//! ```rust
//! use langstring::flags::{Flag, FlagName, Flags};
//!
//! let flags = Flags::new().with(Flag::global(FlagName::StripText), true);
//! assert!(flags.get(Flag::lang_string(FlagName::StripText)));
//! ```

mod controller;
mod flag;
mod registry;

pub use controller::Controller;
pub use flag::{Flag, FlagName, Namespace};
pub use registry::Flags;
