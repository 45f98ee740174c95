//! Combined-log-format access logging.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::Instant;

use crate::state::AppState;
use crate::utils::client_ip::resolve_client_ip;

/// Logs one line per request.
///
/// The client address honours `X-Forwarded-For` / `X-Real-IP` when the
/// site runs behind a proxy.
///
/// ```text
/// 203.0.113.9 - - "GET /short/example HTTP/1.1" 307 - "-" "curl/8.5.0" 3ms
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let ip = resolve_client_ip(req.headers(), peer, state.behind_proxy)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "-".to_string());

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let version = format!("{:?}", req.version());

    let ua = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let referer = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    tracing::info!(
        target: "access",
        r#"{ip} - - "{method} {path} {version}" {status} - "{referer}" "{ua}" {ms}ms"#,
        ip = ip,
        method = method,
        path = path,
        version = version,
        status = status,
        referer = referer,
        ua = ua,
        ms = ms,
    );

    response
}
