//! Cards - per-round runtime state.
//!
//! A `Card` is one position on the board. It references a theme item by
//! `ItemId` and tracks which way up it is.
//!
//! ## Kinds
//!
//! Most decks deal two identical `Twin` cards per item. The numbers deck
//! instead deals one `Numeral` card ("3") and one `Pattern` card (three
//! dice pips) per item; those only pair across kinds.

use serde::{Deserialize, Serialize};

use crate::core::{CardUid, ItemId};
use crate::theme::{ItemDisplay, ThemeItem};

/// Which face of an item a card carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Literal duplicate of the item.
    Twin,
    /// The item's primary face (numeral).
    Numeral,
    /// The item's counterpart face (pattern).
    Pattern,
}

impl CardKind {
    /// Can a card of this kind pair with one of `other`?
    #[must_use]
    pub fn complements(self, other: CardKind) -> bool {
        matches!(
            (self, other),
            (CardKind::Twin, CardKind::Twin)
                | (CardKind::Numeral, CardKind::Pattern)
                | (CardKind::Pattern, CardKind::Numeral)
        )
    }
}

/// Which way up a card is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, awaiting judgment.
    Flipped,
    /// Part of a found pair. Terminal.
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position identity, `0..2N`.
    pub uid: CardUid,

    /// Match identity.
    pub item: ItemId,

    /// Which face of the item this card shows.
    pub kind: CardKind,

    /// Current face state.
    #[serde(default)]
    pub face: FaceState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(uid: CardUid, item: ItemId, kind: CardKind) -> Self {
        Self {
            uid,
            item,
            kind,
            face: FaceState::Hidden,
        }
    }

    /// Do these two cards form a pair?
    ///
    /// Same item, complementary kinds, and never the same card.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.item == other.item && self.uid != other.uid && self.kind.complements(other.kind)
    }

    /// Is this card showing its face (flipped or matched)?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face != FaceState::Hidden
    }

    /// The face this card shows for its item.
    ///
    /// Pattern cards fall back to the primary face if the item has no
    /// pattern.
    #[must_use]
    pub fn display<'a>(&self, item: &'a ThemeItem) -> &'a ItemDisplay {
        match self.kind {
            CardKind::Pattern => item.pattern.as_ref().unwrap_or(&item.display),
            CardKind::Twin | CardKind::Numeral => &item.display,
        }
    }
}
