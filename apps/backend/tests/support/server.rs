// Real HTTP server for websocket tests

use std::net::TcpListener;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use bridge_backend::middleware::request_trace::RequestTrace;
use bridge_backend::middleware::structured_logger::StructuredLogger;
use bridge_backend::middleware::trace_span::TraceSpan;
use bridge_backend::routes;
use bridge_backend::state::app_state::AppState;

/// Bind the production routes to a random local port.
///
/// Returns the server handle (for a graceful stop), the bound address and the
/// join handle of the background server task.
pub async fn start_test_server(
    state: AppState,
) -> Result<
    (
        actix_web::dev::ServerHandle,
        std::net::SocketAddr,
        tokio::task::JoinHandle<Result<(), std::io::Error>>,
    ),
    Box<dyn std::error::Error>,
> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let state_data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .configure(routes::configure)
    })
    .workers(1)
    .shutdown_timeout(1)
    .listen(listener)?
    .run();

    let server_handle = server.handle();
    let join = tokio::spawn(server);

    Ok((server_handle, addr, join))
}

pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);
