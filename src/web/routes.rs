//! Page route configuration.
//!
//! Routes are declared without trailing slashes; the top-level router trims
//! them, so `/about-me/` and `/about-me` reach the same handler.

use crate::state::AppState;
use crate::web::handlers::{
    about_me_handler, about_you_handler, index_handler, login_handler, logout_handler,
    projects_handler, signup_handler, unfinished_handler,
};
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET /about-me` - About page
/// - `GET /about-you` - Visitor details (OS, browser, IP, location)
/// - `GET /contact`, `/me-rn`, `/chat` - Unfinished placeholders
/// - `GET /projects` - Projects index
/// - `GET /projects/{mlmp,jball,latin}` - Unfinished placeholders
/// - `GET /login`, `/signup`, `/logout` - Account stubs
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/about-me", get(about_me_handler))
        .route("/about-you", get(about_you_handler))
        .route("/contact", get(unfinished_handler))
        .route("/me-rn", get(unfinished_handler))
        .route("/chat", get(unfinished_handler))
        .nest("/projects", project_routes())
        .route("/login", get(login_handler))
        .route("/signup", get(signup_handler))
        .route("/logout", get(logout_handler))
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(projects_handler))
        .route("/mlmp", get(unfinished_handler))
        .route("/jball", get(unfinished_handler))
        .route("/latin", get(unfinished_handler))
}
