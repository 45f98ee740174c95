//! Account page stubs. No authentication is performed.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {}

/// `GET /login/`
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate {}
}

/// `GET /signup/`
pub async fn signup_handler() -> &'static str {
    "Signup"
}

/// `GET /logout/`
pub async fn logout_handler() -> &'static str {
    "Logout"
}
