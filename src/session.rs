//! Authenticated user session
//!
//! Sign-in itself is delegated to an external OAuth provider; this type only
//! models what comes back. It is passed explicitly into the coordinator for
//! every operation that needs an identity, never read from ambient state, so
//! everything stays testable without a live identity provider.

use serde::{Deserialize, Serialize};

/// Identity provider the user signed in with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Twitch OAuth
    Twitch,
    /// Google OAuth
    Google,
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Provider-issued subject identifier
    pub subject: String,

    /// Display name; doubles as the default `creator` on submit and as the
    /// like-identity key
    pub display_name: String,

    /// Which provider issued the session
    pub provider: AuthProvider,
}

impl UserSession {
    /// Create a session from provider output
    pub fn new(
        subject: impl Into<String>,
        display_name: impl Into<String>,
        provider: AuthProvider,
    ) -> Self {
        Self {
            subject: subject.into(),
            display_name: display_name.into(),
            provider,
        }
    }

    /// Identity key used for like/unlike calls
    pub fn like_identity(&self) -> &str {
        &self.display_name
    }
}
