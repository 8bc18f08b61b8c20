use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Card, Strain};

/// Cards each player has contributed this deal, keyed by player id.
pub type PlayedCardsView = BTreeMap<Uuid, Vec<Card>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: Uuid,
    pub name: String,
    pub ready: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    Bid,
    Pass,
}

/// One entry of the auction history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecord {
    pub player_id: Uuid,
    pub player_name: String,
    #[serde(rename = "type")]
    pub kind: CallKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Strain>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractView {
    pub player_id: Uuid,
    pub player_name: String,
    pub level: u8,
    pub suit: Strain,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickCardView {
    pub player_id: Uuid,
    pub card: Card,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickWinnerView {
    pub player_id: Uuid,
    pub player_name: String,
    pub winning_card: Card,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickRecordView {
    pub player_id: Uuid,
    pub trick_number: u8,
    pub is_our_team: bool,
    pub winner_name: String,
    pub winning_card: Card,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickStatsView {
    pub declarer_team_tricks: u8,
    pub defender_team_tricks: u8,
    pub trick_records: Vec<TrickRecordView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractResultKind {
    ContractMade,
    ContractFailed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractStatsView {
    pub required: u8,
    pub defender_required: u8,
    pub actual: u8,
    pub undertricks: u8,
    pub tricks_played: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamView {
    pub players: Vec<PlayerRef>,
    pub tricks: u8,
    pub won: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsView {
    pub declarer: TeamView,
    pub defender: TeamView,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractResultView {
    pub result: ContractResultKind,
    pub stats: ContractStatsView,
    pub teams: TeamsView,
}
