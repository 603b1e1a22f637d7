use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use thiserror::Error;

/// Immutable snapshot of the process environment.
///
/// Every resolution function in this crate reads the environment through an
/// `Env` value rather than [`std::env::var`]. Hosts resolve against the real
/// process environment with [`Env::new`]; tests and embedders inject an
/// arbitrary one with [`Env::new_from`], which keeps resolution deterministic
/// without mutating process-global state.
///
/// A snapshot does not observe later changes to the process environment;
/// build a fresh `Env` to pick them up.
#[derive(Debug, Clone)]
pub struct Env {
    vars: HashMap<OsString, OsString>,
}

/// Errors encountered when reading an environment variable as UTF-8.
#[derive(Debug, Clone, Error)]
pub enum EnvError {
    /// This variant indicates, that variable `$Unset.0` is not set at all.
    /// A variable set to the empty string is *not* unset.
    #[error("environment variable `${0:?}` is not set")]
    Unset(OsString),

    /// This variant indicates, that variable `$NotUnicode.0` is not an UTF-8 string.
    #[error("environment variable `${0:?}` is not an UTF-8 string")]
    NotUnicode(OsString),
}

impl Env {
    /// Create new [`Env`] from the environment of the current process.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os())
    }

    /// Create new [`Env`] from arbitrary key/value pairs.
    ///
    /// # Examples
    /// ```rust
    /// use xdgpath::os::env::Env;
    ///
    /// let env = Env::new_from([("HOME".into(), "/home/test".into())]);
    /// assert_eq!(env.get("HOME").ok(), Some("/home/test"));
    /// assert!(env.get("XDG_DATA_HOME").is_err());
    /// ```
    pub fn new_from(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    /// Get the raw value of the variable pointed by `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - key for the environment variable. Must implement `AsRef<OsStr>`.
    ///
    /// # Returns
    /// `Option<&OsStr>`. `None` variant indicates an unset variable; a
    /// variable set to the empty string is `Some` of an empty value.
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Get the value of the variable pointed by `key` and convert it to UTF-8.
    ///
    /// # Arguments
    ///
    /// * `key` - key for the environment variable. Must implement `AsRef<OsStr>`.
    ///
    /// # Returns
    /// `Result<&str, EnvError>`. `Ok` variant indicates an existing UTF-8
    /// variable, `Err` indicates some kind of error. See [`EnvError`] for
    /// details.
    ///
    /// # Examples
    /// ```rust
    /// use xdgpath::os::env::Env;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let env = Env::new();
    /// let _path = env.get("PATH")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self, key: impl AsRef<OsStr>) -> Result<&str, EnvError> {
        let key = key.as_ref();
        self.get_os(key)
            .ok_or_else(|| EnvError::Unset(key.to_os_string()))?
            .to_str()
            .ok_or_else(|| EnvError::NotUnicode(key.to_os_string()))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
