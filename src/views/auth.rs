//! Signup and login forms.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Which of the two credential forms to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Signup,
    Login,
}

impl AuthForm {
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Signup => "Sign Up",
            Self::Login => "Login",
        }
    }

    /// Route the form is served from and posts back to
    pub fn action(&self) -> &'static str {
        match self {
            Self::Signup => "/signup",
            Self::Login => "/login",
        }
    }
}

/// Render a credential form
///
/// `email` pre-fills the email input after a rejected submission. The
/// password is never echoed back.
pub fn auth_form(form: AuthForm, email: &str, error: Option<&str>) -> String {
    let error_html = error
        .map(|message| format!("<p role=\"alert\">{}</p>\n", encode_text(message)))
        .unwrap_or_default();

    format!(
        "<form method=\"post\" action=\"{action}\">\n<h1>{heading}</h1>\n{error}<label>Email:</label>\n<input type=\"email\" name=\"email\" value=\"{email}\" required>\n<label>Password:</label>\n<input type=\"password\" name=\"password\" value=\"\" required>\n<button type=\"submit\">{heading}</button>\n</form>",
        action = form.action(),
        heading = form.heading(),
        error = error_html,
        email = encode_double_quoted_attribute(email),
    )
}
