//! Base-directory resolution following the XDG convention.
//!
//! Each resolver reads the environment through an injected
//! [`Env`](crate::os::env::Env) snapshot and falls back to a conventional
//! location under the user's home directory:
//!
//! ```rust
//! # use xdgpath::basedir::{self, xdg};
//! # use xdgpath::os::env::Env;
//! let env = Env::new_from([("HOME".into(), "/home/test".into())]);
//!
//! assert_eq!(basedir::home(&env).as_deref(), Some("/home/test"));
//! assert_eq!(xdg::cache(&env).as_deref(), Some("/home/test/.cache/"));
//! ```

mod path;
pub mod xdg;

use crate::basedir::path::{Candidate, join};
use crate::os::env::Env;
use crate::os::user;

/// Resolve the user's home directory.
///
/// `$HOME` is returned verbatim when it holds an absolute path. Otherwise a
/// home of `/home/<login name>` is synthesized from
/// [`login_name`](user::login_name).
///
/// # Returns
/// `None` only when `$HOME` is unusable and no login name can be determined
/// either.
pub fn home(env: &Env) -> Option<String> {
    if let Candidate::Absolute(dir) = Candidate::classify(env.get("HOME").ok()) {
        return Some(dir);
    }
    let user = user::login_name(env).filter(|name| !name.is_empty());
    join([Some("/home/"), user.as_deref()])
}
