//! Controller: process-wide flag registry.
//!
//! A thin convenience wrapper around a single [`Flags`] value stored in a
//! `OnceLock`, initialized to defaults on first access. Typed values built
//! with `new` snapshot it; code that wants full control passes its own
//! [`Flags`] to the `with_flags` constructors instead.

use super::flag::{Flag, Namespace};
use super::registry::Flags;
use crate::error::Result;
use std::collections::BTreeMap;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Global flag state (initialized lazily)
static FLAGS: OnceLock<RwLock<Flags>> = OnceLock::new();

/// Static access to the process-wide flags. Cannot be instantiated.
pub enum Controller {}

impl Controller {
    fn state() -> &'static RwLock<Flags> {
        FLAGS.get_or_init(|| RwLock::new(Flags::new()))
    }

    fn read() -> RwLockReadGuard<'static, Flags> {
        Self::state()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write() -> RwLockWriteGuard<'static, Flags> {
        Self::state()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current flags.
    pub fn flags() -> Flags {
        *Self::read()
    }

    /// Replace every flag at once.
    pub fn install(flags: Flags) {
        *Self::write() = flags;
        debug!("Installed new process-wide flags");
    }

    /// Load flags from the process environment and install them.
    pub fn init_from_env() -> Result<Flags> {
        let flags = Flags::from_env()?;
        Self::install(flags);
        Ok(flags)
    }

    pub fn get_flag(flag: Flag) -> bool {
        Self::read().get(flag)
    }

    /// Set a flag; `Global` flags fan out to every namespace.
    pub fn set_flag(flag: Flag, state: bool) {
        Self::write().set(flag, state);
    }

    pub fn get_flags() -> BTreeMap<Flag, bool> {
        Self::read().get_flags()
    }

    pub fn reset_flag(flag: Flag) {
        Self::write().reset_flag(flag);
    }

    /// Reset one namespace, or every namespace when `None`.
    pub fn reset_flags(namespace: Option<Namespace>) {
        let mut flags = Self::write();
        match namespace {
            Some(namespace) => flags.reset_namespace(namespace),
            None => flags.reset_all(),
        }
    }

    pub fn flag_text(flag: Flag) -> String {
        Self::read().print_flag(flag)
    }

    pub fn flags_text(namespace: Option<Namespace>) -> String {
        Self::read().print_flags(namespace)
    }

    /// Print one flag's diagnostic line to stdout.
    pub fn print_flag(flag: Flag) {
        println!("{}", Self::flag_text(flag));
    }

    /// Print diagnostic lines for a namespace (or all) to stdout.
    pub fn print_flags(namespace: Option<Namespace>) {
        print!("{}", Self::flags_text(namespace));
    }
}
