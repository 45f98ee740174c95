//! Static content pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "about-me.html")]
pub struct AboutMeTemplate {}

/// Placeholder for pages that are linked but not written yet.
#[derive(Template, WebTemplate)]
#[template(path = "unfinished.html")]
pub struct UnfinishedTemplate {}

/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}

/// `GET /about-me/`
pub async fn about_me_handler() -> impl IntoResponse {
    AboutMeTemplate {}
}

/// Shared by `/contact/`, `/me-rn/`, `/chat/` and the unfinished projects.
pub async fn unfinished_handler() -> impl IntoResponse {
    UnfinishedTemplate {}
}
