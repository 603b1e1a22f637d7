//! Login-name resolution.
//!
//! Derives the current user's login name from the environment, falling back
//! to the name the operating system recorded for the session.

use tracing::warn;

use crate::os::env::Env;

/// Resolve the current user's login name.
///
/// Sources, in order, first success wins:
/// 1. `$USER`, if set and non-empty.
/// 2. `$LOGNAME`, if set and non-empty.
/// 3. The login name the operating system recorded for this session, which
///    is unavailable when the process is not attached to one.
///
/// # Returns
/// `None` when every source fails. A warning is logged at that point, and
/// callers should treat the absence as final rather than retry: the result
/// cannot change without the environment changing.
///
/// # Examples
/// ```rust
/// use xdgpath::os::env::Env;
/// use xdgpath::os::user;
///
/// let env = Env::new_from([("USER".into(), "test".into())]);
/// assert_eq!(user::login_name(&env).as_deref(), Some("test"));
/// ```
pub fn login_name(env: &Env) -> Option<String> {
    let name = env
        .get("USER")
        .ok()
        .filter(|user| !user.is_empty())
        .or_else(|| env.get("LOGNAME").ok().filter(|logname| !logname.is_empty()))
        .map(str::to_owned)
        .or_else(os_login_name);
    if name.is_none() {
        warn!("no login name in $USER or $LOGNAME and none recorded for this session");
    }
    name
}

/// Ask the operating system for the login name of this session.
#[cfg(unix)]
pub(crate) fn os_login_name() -> Option<String> {
    use std::ffi::CStr;

    // SAFETY: `getlogin` takes no arguments and returns either null or a
    // pointer to a terminated C string in a buffer libc owns.
    let login = unsafe { libc::getlogin() };
    if login.is_null() {
        return None;
    }
    // SAFETY: `login` is non-null, so it points at a terminated C string
    // that stays valid while its bytes are copied out.
    let name = unsafe { CStr::from_ptr(login) };
    name.to_str().ok().map(str::to_owned)
}

#[cfg(not(unix))]
pub(crate) fn os_login_name() -> Option<String> {
    None
}
