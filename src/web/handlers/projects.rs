//! Projects index page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Renders `templates/projects/projects.html`.
#[derive(Template, WebTemplate)]
#[template(path = "projects/projects.html")]
pub struct ProjectsTemplate {}

/// `GET /projects/`
pub async fn projects_handler() -> impl IntoResponse {
    ProjectsTemplate {}
}
