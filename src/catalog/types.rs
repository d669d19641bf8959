//! Catalog Types
//!
//! Read-only display records for courses, instructors and enrollments.

use serde::{Deserialize, Serialize};

/// Summary shown in the course listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl Course {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Path of this course's detail page
    pub fn detail_path(&self) -> String {
        format!("/courses/{}", self.id)
    }
}

/// Full course record shown on the detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    /// Route parameter as given; not necessarily numeric
    pub id: String,
    pub title: String,
    pub description: String,
    pub syllabus: String,
    pub instructor_id: u32,
}

impl CourseDetail {
    /// Placeholder detail for a course id with no fixture
    pub fn placeholder(course_id: &str) -> Self {
        Self {
            id: course_id.to_string(),
            title: format!("Course {}", course_id),
            description: format!("Description of Course {}", course_id),
            syllabus: "Syllabus content".to_string(),
            instructor_id: 1,
        }
    }
}

/// Instructor profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: u32,
    pub name: String,
    pub bio: String,
}

impl Instructor {
    /// Placeholder profile for an instructor id with no fixture
    pub fn placeholder(id: u32) -> Self {
        Self {
            id,
            name: "Instructor Name".to_string(),
            bio: "Instructor bio".to_string(),
        }
    }
}

/// A course the learner is enrolled in, with progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub course_id: u32,
    pub title: String,
    /// Percentage complete (0-100)
    pub progress: u8,
}

impl Enrollment {
    pub fn new(course_id: u32, title: impl Into<String>, progress: u8) -> Self {
        Self {
            course_id,
            title: title.into(),
            progress: progress.min(100),
        }
    }
}
