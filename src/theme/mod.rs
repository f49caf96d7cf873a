//! Theme catalogs.
//!
//! - `ThemeItem`: one catalog entry (id, face, label)
//! - `ItemDisplay`: how a face is drawn (emoji, image, glyph)
//! - `Theme`: the ordered pool a round is drawn from

mod catalog;
mod item;

pub use catalog::Theme;
pub use item::{ItemDisplay, ThemeItem};
