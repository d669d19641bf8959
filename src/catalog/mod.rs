//! Catalog Module
//!
//! Static course, instructor and enrollment fixtures.

pub mod registry;
pub mod types;

pub use registry::CourseCatalog;
pub use types::{Course, CourseDetail, Enrollment, Instructor};
