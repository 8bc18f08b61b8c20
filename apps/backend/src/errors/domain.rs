//! Domain-level error type used across the room flow and the game engines.
//!
//! This error type is transport-agnostic. The room flow turns every
//! `DomainError` into a single `error{message}` event for the offending
//! connection; HTTP handlers convert into `crate::error::AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds: protocol violations and rule breaches a client can cause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    OutOfTurn,
    InvalidBid,
    BidTooLow,
    MustFollowSuit,
    CardIndexOutOfRange,
    PhaseMismatch,
    TrickResolving,
    AuctionClosed,
    NotInRoom,
    AlreadyInRoom,
    InvalidName,
    InvalidRoomId,
    MalformedMessage,
    ParseCard,
    InvalidStrainConversion,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    RoomFull,
    DuplicateName,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Connection,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict with existing room state
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Human-readable message sent to the client in an `error` event.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) => d,
            DomainError::Conflict(_, d) => d,
            DomainError::NotFound(_, d) => d,
        }
    }

    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::OutOfTurn => "OUT_OF_TURN",
                ValidationKind::InvalidBid => "INVALID_BID",
                ValidationKind::BidTooLow => "BID_TOO_LOW",
                ValidationKind::MustFollowSuit => "MUST_FOLLOW_SUIT",
                ValidationKind::CardIndexOutOfRange => "CARD_INDEX_OUT_OF_RANGE",
                ValidationKind::PhaseMismatch => "PHASE_MISMATCH",
                ValidationKind::TrickResolving => "TRICK_RESOLVING",
                ValidationKind::AuctionClosed => "AUCTION_CLOSED",
                ValidationKind::NotInRoom => "NOT_IN_ROOM",
                ValidationKind::AlreadyInRoom => "ALREADY_IN_ROOM",
                ValidationKind::InvalidName => "INVALID_NAME",
                ValidationKind::InvalidRoomId => "INVALID_ROOM_ID",
                ValidationKind::MalformedMessage => "MALFORMED_MESSAGE",
                ValidationKind::ParseCard => "PARSE_CARD",
                ValidationKind::InvalidStrainConversion => "INVALID_STRAIN_CONVERSION",
                ValidationKind::Other(_) => "VALIDATION_ERROR",
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::RoomFull => "ROOM_FULL",
                ConflictKind::DuplicateName => "DUPLICATE_NAME",
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => "ROOM_NOT_FOUND",
                NotFoundKind::Connection => "CONNECTION_NOT_FOUND",
            },
        }
    }
}
