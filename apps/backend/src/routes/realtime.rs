use actix_web::web;

use crate::ws::session;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ws", web::get().to(session::upgrade))
        .route("/", web::get().to(session::upgrade));
}
