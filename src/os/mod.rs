//! Operating-system interaction.
//!
//! Provides the [`Env`](env::Env) environment snapshot and login-name
//! resolution built on top of it.

pub mod env;
pub mod user;
