//! Dealing: turning a selection into 2N shuffled cards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use super::selection::RoundSelection;
use crate::core::{CardUid, GameRng, ItemId, SnapshotError};

/// How the two cards of a pair are derived from one item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairRule {
    /// Two identical cards.
    #[default]
    Twins,
    /// One numeral card and one pattern card.
    NumeralPattern,
}

impl PairRule {
    /// The two card kinds dealt for each item.
    #[must_use]
    pub const fn kinds(self) -> [CardKind; 2] {
        match self {
            PairRule::Twins => [CardKind::Twin, CardKind::Twin],
            PairRule::NumeralPattern => [CardKind::Numeral, CardKind::Pattern],
        }
    }
}

/// Deal two cards per selected item, shuffle, and number them by position.
///
/// Match identity (`item`) and position identity (`uid`) are decoupled:
/// the uid is assigned after the shuffle, so it equals the card's index.
pub fn deal_cards(selection: &RoundSelection, rule: PairRule, rng: &mut GameRng) -> Vec<Card> {
    let [first, second] = rule.kinds();
    let mut dealt: Vec<(ItemId, CardKind)> = selection
        .ids()
        .map(|id| (id, first))
        .chain(selection.ids().map(|id| (id, second)))
        .collect();

    rng.shuffle(&mut dealt);

    dealt
        .into_iter()
        .enumerate()
        .map(|(pos, (item, kind))| Card::new(CardUid::new(pos as u32), item, kind))
        .collect()
}

/// Check that `cards` is a well-formed deal of `items` under `rule`.
///
/// Every uid sits at its own index, and every item appears on exactly
/// the two kinds the rule deals for it.
pub fn check_deal(cards: &[Card], items: &[ItemId], rule: PairRule) -> Result<(), SnapshotError> {
    let expected = items.len() * 2;
    if cards.len() != expected {
        return Err(SnapshotError::WrongCardCount {
            found: cards.len(),
            expected,
        });
    }

    let mut kinds: FxHashMap<ItemId, Vec<CardKind>> = items.iter().map(|&id| (id, Vec::new())).collect();
    for (position, card) in cards.iter().enumerate() {
        if card.uid.index() != position {
            return Err(SnapshotError::UidOutOfPlace { position, uid: card.uid });
        }
        kinds
            .get_mut(&card.item)
            .ok_or(SnapshotError::UnknownItem(card.item))?
            .push(card.kind);
    }

    let [first, second] = rule.kinds();
    for (&item, dealt) in &kinds {
        let well_formed = dealt.len() == 2 && dealt.contains(&first) && dealt.contains(&second);
        if !well_formed {
            return Err(SnapshotError::BrokenPair(item));
        }
    }

    Ok(())
}
