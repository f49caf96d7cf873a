//! # match-pairs
//!
//! A memory-matching ("pairs") game engine.
//!
//! A round picks N items from a themed catalog, deals two cards per item
//! face down, and lets the player turn them over two at a time. Pairs stay
//! up, mismatches turn back after a pause, and the round is won when every
//! pair is found.
//!
//! ## Design Principles
//!
//! 1. **Theme-Agnostic**: The engine knows nothing about animals, flags or
//!    dice. Skins are data: a catalog plus a `GameConfig`.
//!
//! 2. **Host-Driven Time**: Resolution delays run on a virtual clock the
//!    host advances. The engine never sleeps and never spawns.
//!
//! 3. **Seams, Not Presentation**: Rendering, audio, confetti and storage
//!    are traits injected once. Every one of them may fail or be absent
//!    without affecting the game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Round state uses `im-rs` so a host can
//!   hold a cheap copy of the board while the engine keeps playing.
//!
//! - **Deterministic Shuffles**: All randomness flows through one seeded
//!   `GameRng`; the same seed deals the same rounds.
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, configuration, errors
//! - `theme`: Item catalogs
//! - `round`: Round composition and dealing
//! - `engine`: Flip state machine, round state, scheduler
//! - `outputs`: Renderer, audio and celebration seams
//! - `persist`: Session storage and snapshots
//! - `assets`: Offline cache manifest
//! - `games`: The built-in skins

pub mod core;
pub mod theme;
pub mod round;
pub mod engine;
pub mod outputs;
pub mod persist;
pub mod assets;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardUid, ItemId, RoundId,
    GameRng,
    GameConfig, Timings, DEFAULT_PAIRS,
    ConfigError, OutputError, SnapshotError, StoreError,
};

pub use crate::theme::{ItemDisplay, Theme, ThemeItem};

pub use crate::round::{compose_round, deal_cards, Card, CardKind, FaceState, PairRule, RoundSelection};

pub use crate::engine::{
    IgnoreReason, MachineState, MatchEngine, MatchEngineBuilder, Progress, RoundState,
    Selection, Startup, Visibility,
};

pub use crate::outputs::{AudioCues, Celebration, Cue, Noop, Outputs, Renderer};

pub use crate::persist::{MemoryStore, SessionStore, Snapshot, UnavailableStore};

pub use crate::assets::{AssetManifest, CACHE_GENERATION};

pub use crate::games::GameVariant;
