//! Resume-on-reload persistence.
//!
//! - [`SessionStore`]: the key-value seam (`get`/`set`/`delete`)
//! - [`MemoryStore`], [`UnavailableStore`]: in-process and always-failing stores
//! - [`Snapshot`]: the JSON form of an unfinished round
//!
//! Persistence is an optimization. Every failure here falls back to a
//! fresh round; none of it is required for a correct game.

mod snapshot;
mod store;

pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use store::{MemoryStore, SessionStore, UnavailableStore};
