//! Flags: the explicit configuration value read by every constructor and mutator.
//!
//! A `Flags` value is small and `Copy`. Typed values capture one at
//! construction time, so the same value can be threaded through a whole
//! program or swapped per call site in tests without touching global state.

use super::flag::{Flag, FlagName, Namespace};
use std::collections::BTreeMap;
use tracing::debug;

const NAMESPACES: usize = Namespace::ALL.len();
const NAMES: usize = FlagName::ALL.len();

/// Boolean state for every flag of every namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags {
    states: [[bool; NAMES]; NAMESPACES],
}

impl Flags {
    /// Flags at their documented defaults.
    pub fn new() -> Self {
        let mut row = [false; NAMES];
        for name in FlagName::ALL {
            row[name.index()] = name.default_state();
        }
        Self {
            states: [row; NAMESPACES],
        }
    }

    pub fn get(&self, flag: Flag) -> bool {
        self.states[flag.namespace.index()][flag.name.index()]
    }

    /// Shorthand for `get(Flag::new(namespace, name))`.
    pub fn is_enabled(&self, namespace: Namespace, name: FlagName) -> bool {
        self.get(Flag::new(namespace, name))
    }

    /// Set a flag. A `Global` flag also writes the same name in every other namespace.
    pub fn set(&mut self, flag: Flag, state: bool) {
        if flag.namespace == Namespace::Global {
            for namespace in Namespace::ALL {
                self.states[namespace.index()][flag.name.index()] = state;
            }
            debug!("{} = {} (fanned out to all namespaces)", flag, state);
        } else {
            self.states[flag.namespace.index()][flag.name.index()] = state;
            debug!("{} = {}", flag, state);
        }
    }

    /// Builder-style [`Flags::set`].
    pub fn with(mut self, flag: Flag, state: bool) -> Self {
        self.set(flag, state);
        self
    }

    /// Owned copy of every flag state; changing it never affects `self`.
    pub fn get_flags(&self) -> BTreeMap<Flag, bool> {
        Flag::all().map(|flag| (flag, self.get(flag))).collect()
    }

    /// Restore one flag to its default (fanning out for `Global` flags).
    pub fn reset_flag(&mut self, flag: Flag) {
        self.set(flag, flag.default_state());
    }

    /// Restore every flag of a namespace. Resetting `Global` resets everything.
    pub fn reset_namespace(&mut self, namespace: Namespace) {
        if namespace == Namespace::Global {
            self.reset_all();
            return;
        }
        for name in FlagName::ALL {
            self.states[namespace.index()][name.index()] = name.default_state();
        }
        debug!("{} flags reset to defaults", namespace);
    }

    pub fn reset_all(&mut self) {
        *self = Self::new();
        debug!("All flags reset to defaults");
    }

    /// Diagnostic line for one flag, e.g. `GlobalFlag.STRIP_TEXT = False`.
    pub fn print_flag(&self, flag: Flag) -> String {
        let state = if self.get(flag) { "True" } else { "False" };
        format!("{} = {}", flag, state)
    }

    /// Diagnostic lines for one namespace or all of them, sorted by
    /// namespace name then flag name, each newline-terminated.
    pub fn print_flags(&self, namespace: Option<Namespace>) -> String {
        let mut flags: Vec<Flag> = Flag::all()
            .filter(|flag| namespace.map_or(true, |ns| flag.namespace == ns))
            .collect();
        flags.sort_by_key(|flag| (flag.namespace.enum_name(), flag.name.as_str()));

        flags
            .into_iter()
            .map(|flag| format!("{}\n", self.print_flag(flag)))
            .collect()
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}
