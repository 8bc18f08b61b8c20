use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::repos::ConnId;
use crate::state::app_state::AppState;
use crate::ws::hub::{Deliver, WsRegistry};
use crate::ws::lobby::{Connect, Disconnect, Inbound, Lobby, Malformed};
use crate::ws::protocol::ClientMsg;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    let session = WsSession::new(
        conn_id,
        app_state.lobby.clone(),
        app_state.websocket_registry(),
    );
    ws::start(session, &req, stream)
}

/// One websocket connection. Decodes frames into intents for the lobby and
/// writes whatever the lobby delivers back out as text frames.
pub struct WsSession {
    conn_id: ConnId,
    lobby: Addr<Lobby>,
    registry: Arc<WsRegistry>,

    last_heartbeat: Instant,
    heartbeat_handle: Option<SpawnHandle>,
}

impl WsSession {
    fn new(conn_id: ConnId, lobby: Addr<Lobby>, registry: Arc<WsRegistry>) -> Self {
        Self {
            conn_id,
            lobby,
            registry,
            last_heartbeat: Instant::now(),
            heartbeat_handle: None,
        }
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let handle = ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
        self.heartbeat_handle = Some(handle);
    }

    fn forward_text(&self, text: &str) {
        match serde_json::from_str::<ClientMsg>(text) {
            Ok(msg) => {
                debug!(conn_id = %self.conn_id, kind = msg.kind(), "[WS SESSION] inbound");
                self.lobby.do_send(Inbound {
                    conn_id: self.conn_id,
                    msg,
                });
            }
            Err(err) => {
                debug!(conn_id = %self.conn_id, error = %err, "[WS SESSION] undecodable frame");
                self.forward_malformed("Malformed message");
            }
        }
    }

    fn forward_malformed(&self, detail: &str) {
        self.lobby.do_send(Malformed {
            conn_id: self.conn_id,
            detail: detail.to_string(),
        });
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");

        // Register before announcing, so the lobby can reach us from the first event on.
        self.registry
            .register(self.conn_id, ctx.address().recipient::<Deliver>());
        self.lobby.do_send(Connect {
            conn_id: self.conn_id,
        });

        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        if let Some(handle) = self.heartbeat_handle.take() {
            ctx.cancel_future(handle);
        }
        self.registry.unregister(self.conn_id);
        self.lobby.do_send(Disconnect {
            conn_id: self.conn_id,
        });
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                self.forward_text(&text);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.forward_malformed("Binary messages are not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(conn_id = %self.conn_id, error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Deliver> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Deliver, ctx: &mut Self::Context) -> Self::Result {
        ctx.text(msg.0);
    }
}
