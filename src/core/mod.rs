//! Core engine types: identifiers, RNG, configuration, errors.
//!
//! This module contains the building blocks that are theme-agnostic.
//! Game skins configure these via `GameConfig` rather than modifying the core.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CardUid, ItemId, RoundId};
pub use rng::GameRng;
pub use config::{GameConfig, Timings, DEFAULT_PAIRS};
pub use error::{ConfigError, OutputError, SnapshotError, StoreError};
