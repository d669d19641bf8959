//! Web Server
//!
//! Axum router binding each route to its view. The session store and the
//! catalog are created once in [`run_server`] and reach handlers only
//! through [`AppState`].

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use log::{debug, info};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::catalog::{Course, CourseCatalog};
use crate::config::ServerConfig;
use crate::error::{WebError, WebResult};
use crate::forms::Credentials;
use crate::session::{spawn_session_logger, Session, SessionStore};
use crate::views::{self, AuthForm};

/// Shared handles passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub catalog: Arc<CourseCatalog>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionStore>, catalog: Arc<CourseCatalog>) -> Self {
        Self { sessions, catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(SessionStore::new()),
            Arc::new(CourseCatalog::with_fixtures()),
        )
    }
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/session", get(api_session))
        .route("/api/courses", get(api_courses))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(course_list))
        .route("/courses/{course_id}", get(course_detail))
        .route("/signup", get(signup_page).post(signup_submit))
        .route("/login", get(login_page).post(login_submit))
        .route("/profile", get(profile))
        .route("/logout", post(logout))
        .route("/dashboard", get(dashboard))
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
}

async fn course_list(State(state): State<AppState>) -> Html<String> {
    let body = views::course_list(state.catalog.courses());
    Html(views::page("Courses", &body))
}

async fn course_detail(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Html<String> {
    let detail = state.catalog.course_detail(&course_id);
    let instructor = state.catalog.instructor(detail.instructor_id);
    let body = views::course_detail(&detail, &instructor);
    Html(views::page(&detail.title, &body))
}

async fn signup_page() -> Html<String> {
    auth_page(AuthForm::Signup)
}

async fn login_page() -> Html<String> {
    auth_page(AuthForm::Login)
}

fn auth_page(form: AuthForm) -> Html<String> {
    Html(views::page(form.heading(), &views::auth_form(form, "", None)))
}

async fn signup_submit(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> WebResult<Redirect> {
    submit_credentials(&state, AuthForm::Signup, credentials)
}

async fn login_submit(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> WebResult<Redirect> {
    submit_credentials(&state, AuthForm::Login, credentials)
}

/// Signup and login behave identically: the submitted email becomes the session
fn submit_credentials(
    state: &AppState,
    form: AuthForm,
    credentials: Credentials,
) -> WebResult<Redirect> {
    let email = credentials.email.clone();
    let identity = credentials
        .into_identity()
        .map_err(|e| WebError::validation(form, email, e))?;

    debug!("{} accepted for {}", form.action(), identity.email);
    state.sessions.begin_session(identity);
    Ok(Redirect::to("/profile"))
}

async fn profile(State(state): State<AppState>) -> Html<String> {
    let body = views::profile(&state.sessions.current_session());
    Html(views::page("Profile", &body))
}

async fn logout(State(state): State<AppState>) -> Redirect {
    state.sessions.end_session();
    Redirect::to("/")
}

async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let session = state.sessions.current_session();
    let body = views::dashboard(&session, state.catalog.enrollments());
    Html(views::page("Dashboard", &body))
}

async fn health() -> &'static str {
    "OK"
}

async fn api_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.sessions.current_session())
}

async fn api_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog.courses().to_vec())
}

/// Bind and serve until Ctrl+C
pub async fn run_server(config: ServerConfig) -> WebResult<()> {
    let addr = config.socket_addr()?;

    let sessions = Arc::new(SessionStore::new());
    let catalog = Arc::new(CourseCatalog::with_fixtures());
    let logger = spawn_session_logger(sessions.subscribe());

    let app = build_router(AppState::new(sessions, catalog));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| WebError::Bind { addr, source })?;

    info!("Course catalog listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logger.abort();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
