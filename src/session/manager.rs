//! Session Store
//!
//! Process-wide authority for who, if anyone, is logged in. Built once at
//! startup and handed to every handler that needs it.

use chrono::Utc;
use log::{debug, info};
use parking_lot::RwLock;
use tokio::sync::broadcast;

use super::events::SessionEvent;
use super::state::{Identity, Session};

/// Holds the single current session and publishes its transitions
pub struct SessionStore {
    /// Current session value
    current: RwLock<Session>,
    /// Event broadcaster
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    /// Create a store with no session
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(256);

        Self {
            current: RwLock::new(Session::Absent),
            event_tx,
        }
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// Replace the current session with `identity`
    ///
    /// No credential check happens here; whatever identity is passed in
    /// becomes the session. The event is sent before this returns.
    pub fn begin_session(&self, identity: Identity) {
        let mut current = self.current.write();
        let replaced = current.email().map(str::to_string);
        let email = identity.email.clone();
        *current = Session::Present(identity);

        info!("Session begun for {}", email);
        let _ = self.event_tx.send(SessionEvent::Begun {
            email,
            replaced,
            at: Utc::now(),
        });
    }

    /// Clear the current session. Does nothing if already absent.
    pub fn end_session(&self) {
        let mut current = self.current.write();
        match std::mem::take(&mut *current) {
            Session::Present(identity) => {
                info!("Session ended for {}", identity.email);
                let _ = self.event_tx.send(SessionEvent::Ended {
                    email: identity.email,
                    at: Utc::now(),
                });
            }
            Session::Absent => debug!("end_session called with no active session"),
        }
    }

    /// Snapshot of the current session
    pub fn current_session(&self) -> Session {
        self.current.read().clone()
    }

    /// Check if someone is logged in
    pub fn is_logged_in(&self) -> bool {
        self.current.read().is_present()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
