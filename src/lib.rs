//! Xdgpath - XDG base-directory resolution.
//!
//! This crate resolves the standard per-user base directories (data, config,
//! state, cache, runtime) following the XDG Base Directory convention: each
//! location is read from its designated environment variable, with fallbacks
//! assembled under the user's home directory. The environment is read through
//! an injectable [`Env`](os::env::Env) snapshot, so resolution stays
//! deterministic and testable without mutating process-global state.

pub mod basedir;
pub mod os;
