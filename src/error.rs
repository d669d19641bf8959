//! Web Error Types
//!
//! Failures surfaced by the HTTP layer and their response mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::{error, warn};
use std::net::SocketAddr;
use thiserror::Error;

use crate::forms::FormError;
use crate::views::{self, AuthForm};

#[derive(Error, Debug)]
pub enum WebError {
    /// A credential form failed its field checks
    #[error("{source}")]
    Validation {
        form: AuthForm,
        /// Submitted email, echoed back into the form
        email: String,
        source: FormError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebError {
    pub fn validation(form: AuthForm, email: impl Into<String>, source: FormError) -> Self {
        Self::Validation {
            form,
            email: email.into(),
            source,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { form, email, source } => {
                warn!("Rejected {} form: {}", form.action(), source);
                let message = source.to_string();
                let body = views::auth_form(form, &email, Some(&message));
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Html(views::page(form.heading(), &body)),
                )
                    .into_response()
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Result type alias for web operations
pub type WebResult<T> = Result<T, WebError>;
