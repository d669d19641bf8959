//! Signup and login form payloads.
//!
//! Validation mirrors what a browser enforces for `required` and
//! `type="email"` inputs and nothing more. The password is never compared
//! against anything.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::session::Identity;

/// WHATWG "valid email address" production used by `<input type="email">`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

/// Form field rejections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill out the {0} field")]
    MissingField(&'static str),

    #[error("Please enter a valid email address: {0}")]
    InvalidEmail(String),
}

/// Fields posted by the signup and login forms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the fields and produce the identity to log in as
    pub fn into_identity(self) -> Result<Identity, FormError> {
        // Browsers strip surrounding whitespace from email inputs
        let email = self.email.trim();

        if email.is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("password"));
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        Ok(Identity::new(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_password_is_accepted() {
        for password in ["x", "hunter2", "  ", "definitely wrong"] {
            let identity = Credentials::new("u@d.com", password).into_identity().unwrap();
            assert_eq!(identity, Identity::new("u@d.com"));
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            Credentials::new("", "pw").into_identity(),
            Err(FormError::MissingField("email"))
        );
        assert_eq!(
            Credentials::new("u@d.com", "").into_identity(),
            Err(FormError::MissingField("password"))
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(Credentials::new("user@localhost", "pw").into_identity().is_ok());
        assert!(matches!(
            Credentials::new("not-an-email", "pw").into_identity(),
            Err(FormError::InvalidEmail(_))
        ));
        assert!(matches!(
            Credentials::new("a@-bad.com", "pw").into_identity(),
            Err(FormError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_email_is_trimmed() {
        let identity = Credentials::new("  a@b.com \n", "pw").into_identity().unwrap();
        assert_eq!(identity.email, "a@b.com");
    }
}
