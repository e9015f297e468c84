use hub_core::identity::Identity;
use serde::Serialize;

/// Inline message shown on the login view after a rejected attempt.
pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas. Tente novamente.";

/// Result of an authentication attempt.
///
/// Bad credentials are an ordinary outcome; only storage failures surface as
/// errors from [`super::SessionStore::authenticate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum AuthOutcome {
    /// The identity is now current and durably stored.
    Authenticated(Identity),
    /// Unknown identifier or empty secret. Any prior session is untouched.
    Rejected { message: &'static str },
    /// A newer attempt (or a logout) started before this one resolved; its
    /// result was discarded.
    Superseded,
}

impl AuthOutcome {
    pub fn rejected() -> Self {
        Self::Rejected {
            message: INVALID_CREDENTIALS,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
