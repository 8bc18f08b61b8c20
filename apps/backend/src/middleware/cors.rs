use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the configured origins.
///
/// The server only exposes `GET /health` and the websocket upgrade, so only
/// those methods are allowed. An empty list falls back to the local dev origins.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let fallback = [
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ];
    let effective: &[String] = if allowed_origins.is_empty() {
        &fallback
    } else {
        allowed_origins
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-trace-id"),
        ])
        .max_age(3600);

    for origin in effective {
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// Split a comma-separated origin list, dropping blanks, `null` and non-http(s) entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
