//! Session Events
//!
//! Notifications published by the session store whenever the current
//! session changes.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Events emitted on session transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    /// A session began, replacing whatever was there before
    Begun {
        email: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        replaced: Option<String>,
        at: DateTime<Utc>,
    },

    /// The current session ended
    Ended {
        email: String,
        at: DateTime<Utc>,
    },
}

impl SessionEvent {
    /// Email the event refers to
    pub fn email(&self) -> &str {
        match self {
            Self::Begun { email, .. } => email,
            Self::Ended { email, .. } => email,
        }
    }

    /// Event name used in logs
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Begun { .. } => "session:begun",
            Self::Ended { .. } => "session:ended",
        }
    }
}

/// Log every session event until the store is dropped
pub fn spawn_session_logger(mut rx: broadcast::Receiver<SessionEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => match &event {
                    SessionEvent::Begun { email, replaced: Some(prev), .. } => {
                        info!("{}: {} (replaced {})", event.event_name(), email, prev)
                    }
                    _ => info!("{}: {}", event.event_name(), event.email()),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!("Session logger lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
