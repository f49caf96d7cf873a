//! Error types.
//!
//! Only configuration errors ever reach a caller as `Err`. Snapshot, store
//! and output errors are produced by collaborators and swallowed by the
//! engine after logging; they are public so collaborators can return them.

use thiserror::Error;

use super::ids::{CardUid, ItemId};

/// A game configuration that cannot produce a valid round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("A round needs at least one pair")]
    NoPairs,

    #[error("Round of {pairs} pairs needs {pairs} items, theme only has {available}")]
    PoolTooSmall { pairs: usize, available: usize },

    #[error("{pinned} pinned items do not fit in a round of {pairs} pairs")]
    TooManyPinned { pinned: usize, pairs: usize },

    #[error("Pinned item {0} is not in the theme")]
    PinnedNotInTheme(ItemId),

    #[error("No item labelled '{0}' in the theme")]
    UnknownLabel(String),

    #[error("Item {0} pinned more than once")]
    DuplicatePinned(ItemId),

    #[error("Item {0} defined more than once in the theme")]
    DuplicateItem(ItemId),

    #[error("Item {0} has no pattern face for a numeral/pattern deck")]
    MissingPattern(ItemId),

    #[error("Persistence key must not be empty")]
    EmptyStorageKey,
}

/// A persisted snapshot that cannot be restored.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Snapshot has {found} round items, expected {expected}")]
    WrongRoundSize { found: usize, expected: usize },

    #[error("Snapshot has {found} cards, expected {expected}")]
    WrongCardCount { found: usize, expected: usize },

    #[error("Snapshot references item {0} which is not in the theme")]
    UnknownItem(ItemId),

    #[error("Card at position {position} carries uid {uid}")]
    UidOutOfPlace { position: usize, uid: CardUid },

    #[error("Item {0} is not dealt as exactly one valid pair")]
    BrokenPair(ItemId),

    #[error("Matched set references unknown card {0}")]
    UnknownMatched(CardUid),

    #[error("Card {0} is matched without its partner")]
    HalfMatched(CardUid),

    #[error("Snapshot holds a round that is already won")]
    AlreadyWon,
}

/// Session storage failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session storage is unavailable")]
    Unavailable,

    #[error("Session storage quota exceeded ({size} bytes)")]
    QuotaExceeded { size: usize },
}

/// A fire-and-forget output that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputError {
    #[error("Playback rejected: {0}")]
    Rejected(String),

    #[error("Output device unavailable")]
    Unavailable,
}
