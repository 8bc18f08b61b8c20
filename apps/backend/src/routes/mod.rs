use actix_web::web;

pub mod health;
pub mod realtime;

/// Register every route. `main.rs` and the HTTP tests share this so both see
/// the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Websocket upgrade: / and /ws
    realtime::configure_routes(cfg);
}
