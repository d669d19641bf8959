use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use catalog_lib::session::{Identity, Session};
use catalog_lib::web_server::{build_router, AppState};
use tower::ServiceExt;

async fn send(state: &AppState, request: Request<Body>) -> Response {
    build_router(state.clone())
        .oneshot(request)
        .await
        .expect("router is infallible")
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = send(state, request).await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(state: &AppState, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn course_list_renders_fixtures_and_nav() {
    let state = AppState::default();
    let (status, html) = get(&state, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Course Listings</h1>"));
    assert!(html.contains(r#"<a href="/courses/2">View Details</a>"#));
    assert!(html.contains(r#"<a href="/dashboard">Dashboard</a>"#));
}

#[tokio::test]
async fn any_course_id_renders_detail() {
    let state = AppState::default();
    let (status, html) = get(&state, "/courses/99").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Course 99</h1>"));
    assert!(html.contains("<h2>Instructor Name</h2>"));
}

#[tokio::test]
async fn gated_views_without_session() {
    let state = AppState::default();

    let (_, profile) = get(&state, "/profile").await;
    assert!(profile.contains("Please log in"));

    let (_, dashboard) = get(&state, "/dashboard").await;
    assert!(dashboard.contains("Please log in"));
}

#[tokio::test]
async fn login_accepts_any_password() {
    let state = AppState::default();
    let response = post_form(&state, "/login", "email=u%40d.com&password=wrong-on-purpose").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/profile");
    assert_eq!(
        state.sessions.current_session(),
        Session::Present(Identity::new("u@d.com"))
    );

    let (_, profile) = get(&state, "/profile").await;
    assert!(profile.contains("Email: u@d.com"));
}

#[tokio::test]
async fn signup_then_logout_gates_dashboard() {
    let state = AppState::default();
    post_form(&state, "/signup", "email=a%40b.com&password=pw").await;

    let (_, dashboard) = get(&state, "/dashboard").await;
    assert!(dashboard.contains("<h1>Learning Dashboard</h1>"));
    assert!(dashboard.contains("Progress: 50%"));

    let response = post_form(&state, "/logout", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(state.sessions.current_session(), Session::Absent);

    let (_, dashboard) = get(&state, "/dashboard").await;
    assert!(dashboard.contains("Please log in"));
}

#[tokio::test]
async fn missing_password_is_rejected() {
    let state = AppState::default();
    let response = post_form(&state, "/login", "email=u%40d.com&password=").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.sessions.current_session(), Session::Absent);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Please fill out the password field"));
    assert!(html.contains(r#"value="u@d.com""#));
}

#[tokio::test]
async fn rejected_form_keeps_existing_session() {
    let state = AppState::default();
    state.sessions.begin_session(Identity::new("keep@x.com"));

    let response = post_form(&state, "/signup", "email=not-an-email&password=pw").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.sessions.current_session().email(), Some("keep@x.com"));
}

#[tokio::test]
async fn session_api_reports_state() {
    let state = AppState::default();

    let (_, body) = get(&state, "/api/session").await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "absent" }));

    state.sessions.begin_session(Identity::new("a@b.com"));
    let (_, body) = get(&state, "/api/session").await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "present");
    assert_eq!(value["email"], "a@b.com");
}

#[tokio::test]
async fn courses_api_lists_fixtures() {
    let state = AppState::default();
    let (status, body) = get(&state, "/api/courses").await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[0]["title"], "Course 1");
}

#[tokio::test]
async fn health_check() {
    let state = AppState::default();
    let (status, body) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
