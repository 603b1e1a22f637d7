//! XDG Base Directory resolvers.
//!
//! One resolution function per directory kind. Each reads its designated
//! environment variable and, except for [`runtime`], falls back to a
//! conventional location under the user's home directory. Results are
//! assembled by plain concatenation: no normalization, no filesystem access,
//! and nothing is created on disk.

use crate::basedir::home;
use crate::basedir::path::{Candidate, join};
use crate::os::env::Env;

fn resolve(env: &Env, key: &str, suffix: &str) -> Option<String> {
    match Candidate::classify(env.get(key).ok()) {
        Candidate::Absolute(dir) => Some(dir),
        Candidate::Relative => None,
        Candidate::Missing => join([home(env).as_deref(), Some(suffix)]),
    }
}

/// Resolve the data directory, `$XDG_DATA_HOME`.
///
/// # Returns
///
/// - the variable verbatim, when it holds an absolute path;
/// - `<home>/.local/share/`, when the variable is unset or empty;
/// - `None`, when the variable holds a relative path, or when no home
///   directory can be determined.
///
/// # Examples
/// ```rust
/// use xdgpath::basedir::xdg;
/// use xdgpath::os::env::Env;
///
/// let env = Env::new_from([("HOME".into(), "/home/test".into())]);
/// assert_eq!(xdg::data(&env).as_deref(), Some("/home/test/.local/share/"));
/// ```
pub fn data(env: &Env) -> Option<String> {
    resolve(env, "XDG_DATA_HOME", "/.local/share/")
}

/// Resolve the configuration directory, `$XDG_CONFIG_HOME`.
///
/// # Returns
///
/// - the variable verbatim, when it holds an absolute path;
/// - `<home>/.config/`, when the variable is unset or empty;
/// - `None`, when the variable holds a relative path, or when no home
///   directory can be determined.
pub fn config(env: &Env) -> Option<String> {
    resolve(env, "XDG_CONFIG_HOME", "/.config/")
}

/// Resolve the state directory, `$XDG_STATE_HOME`.
///
/// # Returns
///
/// - the variable verbatim, when it holds an absolute path;
/// - `<home>/.local/state/`, when the variable is unset or empty;
/// - `None`, when the variable holds a relative path, or when no home
///   directory can be determined.
pub fn state(env: &Env) -> Option<String> {
    resolve(env, "XDG_STATE_HOME", "/.local/state/")
}

/// Resolve the cache directory, `$XDG_CACHE_HOME`.
///
/// # Returns
///
/// - the variable verbatim, when it holds an absolute path;
/// - `<home>/.cache/`, when the variable is unset or empty;
/// - `None`, when the variable holds a relative path, or when no home
///   directory can be determined.
pub fn cache(env: &Env) -> Option<String> {
    resolve(env, "XDG_CACHE_HOME", "/.cache/")
}

/// Resolve the runtime directory, `$XDG_RUNTIME_DIR`.
///
/// The runtime directory carries permissions only a session manager can
/// arrange, so it has no fallback: an unusable variable is final,
/// regardless of `$HOME` or `$USER`.
///
/// # Returns
/// The variable verbatim when it holds an absolute path, `None` otherwise.
///
/// # Examples
/// ```rust
/// use xdgpath::basedir::xdg;
/// use xdgpath::os::env::Env;
///
/// let env = Env::new_from([("XDG_RUNTIME_DIR".into(), "".into())]);
/// assert_eq!(xdg::runtime(&env), None);
/// ```
pub fn runtime(env: &Env) -> Option<String> {
    match Candidate::classify(env.get("XDG_RUNTIME_DIR").ok()) {
        Candidate::Absolute(dir) => Some(dir),
        Candidate::Relative | Candidate::Missing => None,
    }
}
