use crate::error::{Error, Result};
use crate::flags::{Flag, FlagName, Flags, Namespace};
use std::path::Path;

/// Prefix shared by every flag environment variable.
pub const ENV_PREFIX: &str = "LANGSTRING_";

impl Flags {
    /// Build flags from key/value pairs such as `LANGSTRING_GLOBAL_STRIP_TEXT=true`.
    ///
    /// Global keys are applied first so namespace keys can override their
    /// fan-out. Keys without the `LANGSTRING_` prefix are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Vec::new();
        for (key, value) in vars {
            let Some(rest) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let flag = parse_env_flag(rest).ok_or_else(|| {
                Error::invalid_argument(&key.as_ref(), "Flag", "str")
            })?;
            settings.push((flag, parse_state(value.as_ref())?));
        }

        // Stable sort keeps the input order within each group
        settings.sort_by_key(|(flag, _)| flag.namespace != Namespace::Global);

        let mut flags = Flags::new();
        for (flag, state) in settings {
            flags.set(flag, state);
        }
        Ok(flags)
    }

    /// Build flags from the process environment.
    ///
    /// Variables whose name is not UTF-8 or lacks the prefix are skipped. A
    /// prefixed variable with a non-UTF-8 value is an error.
    pub fn from_env() -> Result<Self> {
        let mut vars = Vec::new();
        for (key, value) in std::env::vars_os() {
            let Some(key) = key.to_str().filter(|key| key.starts_with(ENV_PREFIX)) else {
                continue;
            };
            let value = value
                .into_string()
                .map_err(|raw| Error::invalid_argument(&raw, "str", "bytes"))?;
            vars.push((key.to_string(), value));
        }
        Self::from_vars(vars)
    }

    /// Build flags from a dotenv file without modifying the process environment.
    pub fn from_dotenv_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let mut vars = Vec::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            vars.push(item?);
        }
        Ok(Self::from_vars(vars)?)
    }
}

fn parse_env_flag(rest: &str) -> Option<Flag> {
    Namespace::ALL.into_iter().find_map(|namespace| {
        let name = rest
            .strip_prefix(namespace.env_segment())?
            .strip_prefix('_')?;
        FlagName::ALL
            .into_iter()
            .find(|flag| flag.as_str() == name)
            .map(|name| Flag::new(namespace, name))
    })
}

fn parse_state(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::invalid_argument(&value, "bool", "str")),
    }
}
