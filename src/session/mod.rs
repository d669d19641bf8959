//! Session Module
//!
//! The one piece of shared mutable state in the catalog:
//! - A single current session, absent or present with an identity
//! - Synchronous change notifications over a broadcast channel
//! - No credential checks; whatever email is submitted becomes the session

pub mod events;
pub mod manager;
pub mod state;

pub use events::{spawn_session_logger, SessionEvent};
pub use manager::SessionStore;
pub use state::{Identity, Session};
