//! Course Catalog
//!
//! Fixture-backed lookup for everything the views display. Nothing here
//! changes after construction.

use log::debug;
use std::collections::HashMap;

use super::types::{Course, CourseDetail, Enrollment, Instructor};

/// In-memory catalog of courses, instructors and the learner's enrollments
pub struct CourseCatalog {
    /// Listing order is fixture order
    courses: Vec<Course>,
    /// Detail records (course_id -> CourseDetail)
    details: HashMap<String, CourseDetail>,
    /// Instructors (instructor_id -> Instructor)
    instructors: HashMap<u32, Instructor>,
    enrollments: Vec<Enrollment>,
}

impl CourseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            details: HashMap::new(),
            instructors: HashMap::new(),
            enrollments: Vec::new(),
        }
    }

    /// Catalog seeded with the built-in demo fixtures
    pub fn with_fixtures() -> Self {
        let mut catalog = Self::new();

        for id in 1..=2 {
            let course = Course::new(
                id,
                format!("Course {}", id),
                format!("Description of Course {}", id),
            );
            catalog.add_course(course, "Syllabus content", 1);
        }

        catalog.add_instructor(Instructor::placeholder(1));
        catalog.enroll(Enrollment::new(1, "Course 1", 50));
        catalog.enroll(Enrollment::new(2, "Course 2", 30));

        debug!(
            "Catalog seeded with {} courses, {} instructors",
            catalog.courses.len(),
            catalog.instructors.len()
        );
        catalog
    }

    /// Add a course with its syllabus and instructor
    pub fn add_course(&mut self, course: Course, syllabus: impl Into<String>, instructor_id: u32) {
        let detail = CourseDetail {
            id: course.id.to_string(),
            title: course.title.clone(),
            description: course.description.clone(),
            syllabus: syllabus.into(),
            instructor_id,
        };
        self.details.insert(detail.id.clone(), detail);
        self.courses.push(course);
    }

    pub fn add_instructor(&mut self, instructor: Instructor) {
        self.instructors.insert(instructor.id, instructor);
    }

    pub fn enroll(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    /// All courses in listing order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Detail for `course_id`; unknown ids get a placeholder record
    pub fn course_detail(&self, course_id: &str) -> CourseDetail {
        match self.details.get(course_id) {
            Some(detail) => detail.clone(),
            None => {
                debug!("No fixture for course {}, using placeholder", course_id);
                CourseDetail::placeholder(course_id)
            }
        }
    }

    /// Instructor for `instructor_id`; unknown ids get a placeholder profile
    pub fn instructor(&self, instructor_id: u32) -> Instructor {
        self.instructors
            .get(&instructor_id)
            .cloned()
            .unwrap_or_else(|| Instructor::placeholder(instructor_id))
    }

    /// Enrolled courses shown on the dashboard
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::with_fixtures()
    }
}
