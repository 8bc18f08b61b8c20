use actix_web::{web, App, HttpServer};
use bridge_backend::config::server::ServerConfig;
use bridge_backend::middleware::cors::cors_middleware;
use bridge_backend::middleware::request_trace::RequestTrace;
use bridge_backend::middleware::structured_logger::StructuredLogger;
use bridge_backend::middleware::trace_span::TraceSpan;
use bridge_backend::routes;
use bridge_backend::state::app_state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        trick_clear_delay_ms = config.room.trick_clear_delay.as_millis() as u64,
        deal_end_delay_ms = config.room.deal_end_delay.as_millis() as u64,
        auction_reset_delay_ms = config.room.auction_reset_delay.as_millis() as u64,
        restart_notify_all = config.room.restart_notify_all,
        seeded = config.deal_seed.is_some(),
        "Starting bridge backend"
    );

    let app_state = AppState::launch(config.room.clone(), config.deal_seed);
    let data = web::Data::new(app_state);
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
