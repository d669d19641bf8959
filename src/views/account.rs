//! Views gated on the current session: profile and dashboard.

use html_escape::encode_text;

use crate::catalog::Enrollment;
use crate::session::{Identity, Session};

/// Shown by gated views when nobody is logged in
pub const LOGIN_PLACEHOLDER: &str = "Please log in";

/// Render `content` for the logged-in identity, or the login placeholder
pub fn gated<F>(session: &Session, content: F) -> String
where
    F: FnOnce(&Identity) -> String,
{
    match session {
        Session::Present(identity) => content(identity),
        Session::Absent => format!("<div>{}</div>", LOGIN_PLACEHOLDER),
    }
}

pub fn profile(session: &Session) -> String {
    gated(session, |identity| {
        format!(
            "<div>\n<h1>Profile</h1>\n<p>Email: {}</p>\n<form method=\"post\" action=\"/logout\">\n<button type=\"submit\">Logout</button>\n</form>\n</div>",
            encode_text(&identity.email)
        )
    })
}

pub fn dashboard(session: &Session, enrollments: &[Enrollment]) -> String {
    gated(session, |_| {
        let items: String = enrollments
            .iter()
            .map(|e| {
                format!(
                    "<li>\n<h3>{}</h3>\n<p>Progress: {}%</p>\n</li>\n",
                    encode_text(&e.title),
                    e.progress
                )
            })
            .collect();

        format!(
            "<div>\n<h1>Learning Dashboard</h1>\n<h2>Enrolled Courses</h2>\n<ul>\n{}</ul>\n</div>",
            items
        )
    })
}
