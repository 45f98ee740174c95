//! "About you" page showing what the site can see about the visitor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};

use crate::state::AppState;
use crate::utils::client_ip::ClientIp;

/// Renders `templates/about-you.html`.
#[derive(Template, WebTemplate)]
#[template(path = "about-you.html")]
pub struct AboutYouTemplate {
    pub os: String,
    pub browser: String,
    pub ip: String,
    pub loc: Option<String>,
}

/// `GET /about-you/`
///
/// Geo-IP failures only drop the location line; the page always renders.
pub async fn about_you_handler(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    headers: HeaderMap,
) -> impl IntoResponse {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    let profile = state.visitor_service.describe(user_agent, ip).await;

    AboutYouTemplate {
        os: profile.os,
        browser: profile.browser,
        ip: profile.ip,
        loc: profile.location,
    }
}
