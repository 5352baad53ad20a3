//! Session: who is acting.
//!
//! Services that record authorship need the current user. Rather than
//! requiring `--as` on every invocation, the user is resolved through a chain:
//!
//! 1. `--as <user>`: explicit per-command override
//! 2. `KINSHIP_USER` env var: process/session level
//! 3. `user` in `~/.kinship/config.toml`: global default
//!
//! When none yields a value the session is anonymous: reads still work, but
//! anything that records authorship fails.

use std::env;

/// Environment variable consulted for the acting user.
pub const USER_ENV: &str = "KINSHIP_USER";

const SIGN_IN_HINT: &str =
    "pass --as <user>, set KINSHIP_USER, or add `user = \"...\"` to ~/.kinship/config.toml";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("not signed in: {hint}", hint = SIGN_IN_HINT)]
    NotSignedIn,
}

/// The authentication capability services consume.
pub trait Session {
    /// The signed-in user's name.
    fn current_user(&self) -> Result<String, SessionError>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_ok()
    }
}

/// A session whose user was resolved once, up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSession {
    user: Option<String>,
}

impl ResolvedSession {
    pub fn signed_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolve from the `--as` flag, the environment, then the configured user.
    pub fn resolve(explicit: Option<&str>, configured: Option<&str>) -> Self {
        let from_env = env::var(USER_ENV).ok();
        Self {
            user: pick_user(explicit, from_env.as_deref(), configured),
        }
    }
}

impl Session for ResolvedSession {
    fn current_user(&self) -> Result<String, SessionError> {
        self.user.clone().ok_or(SessionError::NotSignedIn)
    }
}

/// The first non-empty source wins.
fn pick_user(
    explicit: Option<&str>,
    env: Option<&str>,
    configured: Option<&str>,
) -> Option<String> {
    [explicit, env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(String::from)
}
