//! Identifier newtypes.
//!
//! Three kinds of identity show up in a round and must never be confused:
//!
//! - [`ItemId`]: *match* identity. Which theme item a card shows. Two cards
//!   with the same `ItemId` may form a pair.
//! - [`CardUid`]: *position* identity. Unique per card within a round,
//!   `0..2N`, so that the two copies of an item flip independently.
//! - [`RoundId`]: which round a piece of work belongs to. Scheduled
//!   resolutions carry one so late timers from an abandoned round are
//!   discarded.

use serde::{Deserialize, Serialize};

/// Identifier of a theme item (the "what is on the card" identity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Per-round card identifier.
///
/// Assigned after the deal is shuffled, so the uid is also the card's
/// index in [`RoundState::cards`](crate::engine::RoundState::cards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Create a new card uid.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The card's position in the dealt sequence.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Identity of one round, monotonically increasing per engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// The round following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}
