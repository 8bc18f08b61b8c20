use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Card, Strain};
use crate::protocol::game_state::{
    BidRecord, ContractResultView, ContractView, PlayedCardsView, PlayerRef, PlayerSummary,
    TrickCardView, TrickStatsView, TrickWinnerView,
};

/// Intents a client may send. Unknown `type` values fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: String, player_name: String },
    Ready,
    CancelReady,
    MakeBid { level: u8, suit: Strain },
    PassBid,
    #[serde(rename_all = "camelCase")]
    PlayCard { card_index: usize },
    RestartGame,
}

impl ClientMsg {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMsg::JoinRoom { .. } => "join_room",
            ClientMsg::Ready => "ready",
            ClientMsg::CancelReady => "cancel_ready",
            ClientMsg::MakeBid { .. } => "make_bid",
            ClientMsg::PassBid => "pass_bid",
            ClientMsg::PlayCard { .. } => "play_card",
            ClientMsg::RestartGame => "restart_game",
        }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    Error {
        message: String,
    },

    #[serde(rename_all = "camelCase")]
    RoomInfo {
        room_id: String,
        player_id: Uuid,
        players: Vec<PlayerSummary>,
    },

    PlayerJoined {
        player: PlayerSummary,
    },

    #[serde(rename_all = "camelCase")]
    PlayerReady {
        player_id: Uuid,
    },

    #[serde(rename_all = "camelCase")]
    PlayerCancelReady {
        player_id: Uuid,
    },

    #[serde(rename_all = "camelCase")]
    PlayerLeft {
        player_id: Uuid,
        remaining_players: usize,
    },

    GameReset {
        message: String,
    },

    #[serde(rename_all = "camelCase")]
    BiddingStarted {
        current_bidder: Uuid,
        current_bidder_name: String,
        hand: Vec<Card>,
        bids: Vec<BidRecord>,
    },

    #[serde(rename_all = "camelCase")]
    BidMade {
        bid: BidRecord,
        bids: Vec<BidRecord>,
        current_bidder: Uuid,
        current_bidder_name: String,
    },

    #[serde(rename_all = "camelCase")]
    BidPassed {
        pass_info: BidRecord,
        bids: Vec<BidRecord>,
        current_bidder: Uuid,
        current_bidder_name: String,
        pass_count: u8,
    },

    BiddingFailed {
        message: String,
    },

    #[serde(rename_all = "camelCase")]
    GameStarted {
        current_player: Uuid,
        current_player_name: String,
        trump_suit: Strain,
        final_contract: ContractView,
    },

    #[serde(rename_all = "camelCase")]
    CardPlayed {
        player_id: Uuid,
        card: Card,
        /// `None` once the trick is complete; the winner is announced separately.
        current_player: Option<Uuid>,
        current_trick: u8,
        trick_count: usize,
        player_played_cards: PlayedCardsView,
    },

    #[serde(rename_all = "camelCase")]
    TrickCompleted {
        trick_number: u8,
        trick_cards: Vec<TrickCardView>,
        player_played_cards: PlayedCardsView,
        trick_winner: TrickWinnerView,
        trick_stats: TrickStatsView,
    },

    #[serde(rename_all = "camelCase")]
    TrickCleared {
        current_trick: u8,
        current_player: Uuid,
        player_played_cards: PlayedCardsView,
    },

    #[serde(rename_all = "camelCase")]
    GameEnded {
        contract_result: ContractResultView,
        final_hands: Vec<Vec<Card>>,
    },

    #[serde(rename_all = "camelCase")]
    GameEndedDisconnect {
        message: String,
        disconnected_player: PlayerRef,
        remaining_players: Vec<PlayerRef>,
    },

    GameRestarted {
        message: String,
        players: Vec<PlayerSummary>,
        hand: Vec<Card>,
    },
}

impl ServerMsg {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMsg::Error {
            message: message.into(),
        }
    }

    /// The `type` tag, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMsg::Error { .. } => "error",
            ServerMsg::RoomInfo { .. } => "room_info",
            ServerMsg::PlayerJoined { .. } => "player_joined",
            ServerMsg::PlayerReady { .. } => "player_ready",
            ServerMsg::PlayerCancelReady { .. } => "player_cancel_ready",
            ServerMsg::PlayerLeft { .. } => "player_left",
            ServerMsg::GameReset { .. } => "game_reset",
            ServerMsg::BiddingStarted { .. } => "bidding_started",
            ServerMsg::BidMade { .. } => "bid_made",
            ServerMsg::BidPassed { .. } => "bid_passed",
            ServerMsg::BiddingFailed { .. } => "bidding_failed",
            ServerMsg::GameStarted { .. } => "game_started",
            ServerMsg::CardPlayed { .. } => "card_played",
            ServerMsg::TrickCompleted { .. } => "trick_completed",
            ServerMsg::TrickCleared { .. } => "trick_cleared",
            ServerMsg::GameEnded { .. } => "game_ended",
            ServerMsg::GameEndedDisconnect { .. } => "game_ended_disconnect",
            ServerMsg::GameRestarted { .. } => "game_restarted",
        }
    }
}
