//! Serialization and deserialization for card types
//!
//! Wire format follows what the browser client renders: suits as their
//! symbols, ranks as face labels and cards as `{suit, rank, value}` objects.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Suit, Strain};

fn parse_suit(s: &str) -> Option<Suit> {
    match s {
        "♠" | "S" => Some(Suit::Spades),
        "♥" | "H" => Some(Suit::Hearts),
        "♦" | "D" => Some(Suit::Diamonds),
        "♣" | "C" => Some(Suit::Clubs),
        _ => None,
    }
}

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_suit(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}

// Strain serde
impl Serialize for Strain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Strain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == "NT" {
            return Ok(Strain::NoTrump);
        }
        parse_suit(&s)
            .map(Strain::from)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid strain: {s}")))
    }
}

// Rank serde
impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rank::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid rank: {s}")))
    }
}

// Card serde ({suit, rank, value})
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = serializer.serialize_struct("Card", 3)?;
        st.serialize_field("suit", &self.suit)?;
        st.serialize_field("rank", &self.rank)?;
        st.serialize_field("value", &self.value())?;
        st.end()
    }
}

#[derive(Deserialize)]
struct CardWire {
    suit: Suit,
    rank: Rank,
    #[serde(default)]
    value: Option<u8>,
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CardWire::deserialize(deserializer)?;
        let card = Card::new(wire.suit, wire.rank);
        match wire.value {
            Some(v) if v != card.value() => Err(serde::de::Error::custom(format!(
                "Card value {v} does not match rank {}",
                wire.rank.label()
            ))),
            _ => Ok(card),
        }
    }
}
