//! Session State
//!
//! The value held by the session store: either nobody is logged in or
//! exactly one identity is.

use serde::{Deserialize, Serialize};

/// Identifying data captured at login or signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    /// Create an identity from an email address
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

/// Current session value
///
/// There is no partially-populated variant: a session either carries a full
/// [`Identity`] or it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Session {
    /// Nobody is logged in
    #[default]
    Absent,
    /// Someone is logged in as this identity
    Present(Identity),
}

impl Session {
    /// Check if someone is logged in
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the identity if present
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Present(identity) => Some(identity),
            Self::Absent => None,
        }
    }

    /// Email of the logged-in identity, if any
    pub fn email(&self) -> Option<&str> {
        self.identity().map(|i| i.email.as_str())
    }
}

impl From<Identity> for Session {
    fn from(identity: Identity) -> Self {
        Self::Present(identity)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Present(identity) => write!(f, "present({})", identity.email),
        }
    }
}
