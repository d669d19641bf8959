//! Page shell and navigation bar shared by every view.

use html_escape::encode_text;

/// Navigation links in display order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Courses"),
    ("/signup", "Sign Up"),
    ("/login", "Login"),
    ("/profile", "Profile"),
    ("/dashboard", "Dashboard"),
];

pub fn nav() -> String {
    let links: Vec<String> = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<a href="{}">{}</a>"#, href, label))
        .collect();
    format!("<nav>{}</nav>", links.join(" | "))
}

/// Wrap a rendered view in a complete HTML document
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n<main>\n{}\n</main>\n</body>\n</html>\n",
        encode_text(title),
        nav(),
        body
    )
}
