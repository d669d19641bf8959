//! Views Module
//!
//! Server-rendered HTML for each page. Views are plain functions of the data
//! they are handed; gated views take the current [`Session`] explicitly.
//!
//! [`Session`]: crate::session::Session

pub mod account;
pub mod auth;
pub mod courses;
pub mod layout;

pub use account::{dashboard, gated, profile, LOGIN_PLACEHOLDER};
pub use auth::{auth_form, AuthForm};
pub use courses::{course_detail, course_list, instructor_profile};
pub use layout::{nav, page};
