//! Catalog views: course listing, course detail and instructor profile.
//!
//! These never depend on the session.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::catalog::{Course, CourseDetail, Instructor};

pub fn course_list(courses: &[Course]) -> String {
    let items: String = courses
        .iter()
        .map(|course| {
            format!(
                "<li>\n<h2>{}</h2>\n<p>{}</p>\n<a href=\"{}\">View Details</a>\n</li>\n",
                encode_text(&course.title),
                encode_text(&course.description),
                encode_double_quoted_attribute(&course.detail_path()),
            )
        })
        .collect();

    format!("<div>\n<h1>Course Listings</h1>\n<ul>\n{}</ul>\n</div>", items)
}

/// Detail page with the instructor profile embedded
pub fn course_detail(course: &CourseDetail, instructor: &Instructor) -> String {
    format!(
        "<div>\n<h1>{}</h1>\n<p>{}</p>\n<h2>Syllabus</h2>\n<p>{}</p>\n<h2>Instructor</h2>\n{}\n</div>",
        encode_text(&course.title),
        encode_text(&course.description),
        encode_text(&course.syllabus),
        instructor_profile(instructor),
    )
}

pub fn instructor_profile(instructor: &Instructor) -> String {
    format!(
        "<div>\n<h2>{}</h2>\n<p>{}</p>\n</div>",
        encode_text(&instructor.name),
        encode_text(&instructor.bio),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseCatalog;

    #[test]
    fn test_course_list_links_each_course() {
        let catalog = CourseCatalog::with_fixtures();
        let html = course_list(catalog.courses());

        assert!(html.contains("<h1>Course Listings</h1>"));
        assert!(html.contains("<h2>Course 1</h2>"));
        assert!(html.contains("<p>Description of Course 2</p>"));
        assert!(html.contains(r#"<a href="/courses/1">View Details</a>"#));
        assert!(html.contains(r#"<a href="/courses/2">View Details</a>"#));
    }

    #[test]
    fn test_course_detail_embeds_instructor() {
        let catalog = CourseCatalog::with_fixtures();
        let detail = catalog.course_detail("7");
        let html = course_detail(&detail, &catalog.instructor(detail.instructor_id));

        assert!(html.contains("<h1>Course 7</h1>"));
        assert!(html.contains("<h2>Syllabus</h2>"));
        assert!(html.contains("<p>Syllabus content</p>"));
        assert!(html.contains("<h2>Instructor Name</h2>"));
        assert!(html.contains("<p>Instructor bio</p>"));
    }

    #[test]
    fn test_route_id_is_escaped() {
        let detail = CourseDetail::placeholder("<script>");
        let html = course_detail(&detail, &Instructor::placeholder(1));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Course &lt;script&gt;"));
    }
}
