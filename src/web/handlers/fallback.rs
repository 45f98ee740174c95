//! Handler for paths that match no route.

use axum::{
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;

/// Redirects legacy `*.html` paths to their directory form and renders the
/// 404 page for everything else.
///
/// `/about-me.html` → `/about-me/`
pub async fn fallback_handler(uri: Uri) -> Response {
    match html_redirect_target(uri.path()) {
        Some(target) => Redirect::to(&target).into_response(),
        None => AppError::NotFound.into_response(),
    }
}

fn html_redirect_target(path: &str) -> Option<String> {
    let stem = path.trim_end_matches('/').strip_suffix(".html")?;
    let stem = stem.trim_start_matches('/');

    if stem.is_empty() {
        return None;
    }

    Some(format!("/{}/", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_redirect_target() {
        assert_eq!(
            html_redirect_target("/about-me.html").as_deref(),
            Some("/about-me/")
        );
        assert_eq!(
            html_redirect_target("/projects/mlmp.html/").as_deref(),
            Some("/projects/mlmp/")
        );
        assert_eq!(html_redirect_target("/.html"), None);
        assert_eq!(html_redirect_target("/missing"), None);
    }
}
