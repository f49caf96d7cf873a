//! Theme items - static catalog entries.
//!
//! A `ThemeItem` is what a card shows. It never changes during a game;
//! per-card state (face up, matched) lives on `Card`.

use serde::{Deserialize, Serialize};

use crate::core::ItemId;

/// How an item is drawn on a card face.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemDisplay {
    /// An emoji rendered as text.
    Emoji(String),
    /// A path to an image asset (photo, flag).
    Image(String),
    /// A plain glyph (numeral, dice face).
    Glyph(String),
}

impl ItemDisplay {
    /// An emoji face.
    pub fn emoji(text: impl Into<String>) -> Self {
        Self::Emoji(text.into())
    }

    /// An image face.
    pub fn image(path: impl Into<String>) -> Self {
        Self::Image(path.into())
    }

    /// A glyph face.
    pub fn glyph(text: impl Into<String>) -> Self {
        Self::Glyph(text.into())
    }

    /// The asset path, if this face is an image.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        match self {
            ItemDisplay::Image(path) => Some(path.as_str()),
            ItemDisplay::Emoji(_) | ItemDisplay::Glyph(_) => None,
        }
    }
}

/// A catalog entry.
///
/// ## Example
///
/// ```
/// use match_pairs::core::ItemId;
/// use match_pairs::theme::{ItemDisplay, ThemeItem};
///
/// let three = ThemeItem::new(ItemId::new(3), ItemDisplay::glyph("3"), "Three")
///     .with_pattern(ItemDisplay::glyph("\u{2682}"));
///
/// assert_eq!(three.label, "Three");
/// assert!(three.pattern.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeItem {
    /// Match identity.
    pub id: ItemId,

    /// Primary face.
    pub display: ItemDisplay,

    /// Caption shown under the face.
    pub label: String,

    /// Counterpart face for numeral/pattern decks (e.g. the dice pips).
    #[serde(default)]
    pub pattern: Option<ItemDisplay>,
}

impl ThemeItem {
    /// Create a new item.
    pub fn new(id: ItemId, display: ItemDisplay, label: impl Into<String>) -> Self {
        Self {
            id,
            display,
            label: label.into(),
            pattern: None,
        }
    }

    /// Set the counterpart face.
    #[must_use]
    pub fn with_pattern(mut self, pattern: ItemDisplay) -> Self {
        self.pattern = Some(pattern);
        self
    }
}
