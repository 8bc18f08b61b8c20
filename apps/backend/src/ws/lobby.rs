//! The lobby actor: sole owner of the room flow.
//!
//! Sessions forward decoded intents here with `do_send`; the actor mailbox
//! turns them into a single ordered stream of mutations, so one room never
//! sees two changes at once. Deferred transitions are scheduled on the
//! lobby's own context and re-enter through the same mailbox.

use actix::prelude::*;
use tracing::{debug, info};

use crate::repos::ConnId;
use crate::services::room_flow::{Deferred, RoomFlowService, RoomStats};
use crate::ws::protocol::ClientMsg;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: ConnId,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Inbound {
    pub conn_id: ConnId,
    pub msg: ClientMsg,
}

/// A frame that could not be decoded into a [`ClientMsg`].
#[derive(Message)]
#[rtype(result = "()")]
pub struct Malformed {
    pub conn_id: ConnId,
    pub detail: String,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: ConnId,
}

#[derive(Message)]
#[rtype(result = "RoomStats")]
pub struct GetStats;

pub struct Lobby {
    flow: RoomFlowService,
}

impl Lobby {
    pub fn new(flow: RoomFlowService) -> Self {
        Self { flow }
    }

    fn schedule(&self, ctx: &mut Context<Self>, deferred: Vec<Deferred>) {
        for d in deferred {
            debug!(
                room_id = %d.room_id,
                action = ?d.action,
                generation = d.generation,
                delay_ms = d.delay.as_millis() as u64,
                "[LOBBY] scheduling deferred action"
            );
            ctx.run_later(d.delay, move |act, ctx| {
                let next = act.flow.fire(d);
                act.schedule(ctx, next);
            });
        }
    }
}

impl Actor for Lobby {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[LOBBY] started");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        let stats = self.flow.stats();
        info!(
            rooms = stats.rooms,
            connections = stats.connections,
            "[LOBBY] stopped"
        );
    }
}

impl Handler<Connect> for Lobby {
    type Result = ();

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) {
        self.flow.connect(msg.conn_id);
    }
}

impl Handler<Inbound> for Lobby {
    type Result = ();

    fn handle(&mut self, msg: Inbound, ctx: &mut Self::Context) {
        let deferred = self.flow.handle(msg.conn_id, msg.msg);
        self.schedule(ctx, deferred);
    }
}

impl Handler<Malformed> for Lobby {
    type Result = ();

    fn handle(&mut self, msg: Malformed, _ctx: &mut Self::Context) {
        self.flow.reject_malformed(msg.conn_id, msg.detail);
    }
}

impl Handler<Disconnect> for Lobby {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) {
        self.flow.disconnect(msg.conn_id);
    }
}

impl Handler<GetStats> for Lobby {
    type Result = MessageResult<GetStats>;

    fn handle(&mut self, _msg: GetStats, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.flow.stats())
    }
}
