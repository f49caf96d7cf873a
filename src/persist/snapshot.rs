//! Persisted snapshots of an in-progress round.
//!
//! A snapshot is an engine-internal JSON blob, not a public format. It
//! carries what is needed to put the same board back: the round's items,
//! the dealt cards, and the matched set. The flipped buffer and the
//! processing lock are never resumed; if a foreign writer included them
//! they are read and dropped.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{CardUid, GameConfig, ItemId, RoundId, SnapshotError};
use crate::engine::RoundState;
use crate::round::{check_deal, Card, RoundSelection};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of an unfinished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Layout version.
    pub version: u32,

    /// Items in the round, selection order.
    pub round_items: Vec<ItemId>,

    /// Cards in uid order.
    pub cards: Vec<Card>,

    /// Matched cards.
    pub matched: Vec<CardUid>,

    /// Accepted for compatibility, never resumed.
    #[serde(default, skip_serializing)]
    pub flipped: Vec<CardUid>,

    /// Accepted for compatibility, never resumed.
    #[serde(default, skip_serializing)]
    pub processing: bool,
}

impl Snapshot {
    /// Capture a round.
    #[must_use]
    pub fn capture(state: &RoundState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            round_items: state.selection().ids().collect(),
            cards: state.cards().iter().cloned().collect(),
            matched: state.matched().iter().copied().collect(),
            flipped: Vec::new(),
            processing: false,
        }
    }

    /// Serialize to the stored string form.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the stored string form.
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    /// Rebuild a round from this snapshot.
    ///
    /// The snapshot is checked against `config`: the round size, the theme,
    /// the pairing rule, and the matched set must all agree. A snapshot of
    /// a won round is rejected; there is nothing to resume.
    pub fn into_round(self, config: &GameConfig, round: RoundId) -> Result<RoundState, SnapshotError> {
        if self.round_items.len() != config.pairs {
            return Err(SnapshotError::WrongRoundSize {
                found: self.round_items.len(),
                expected: config.pairs,
            });
        }

        let mut items = Vec::with_capacity(self.round_items.len());
        for &id in &self.round_items {
            let item = config.theme.get(id).ok_or(SnapshotError::UnknownItem(id))?;
            items.push(item.clone());
        }

        check_deal(&self.cards, &self.round_items, config.pair_rule)?;

        let mut matched = OrdSet::new();
        for &uid in &self.matched {
            if uid.index() >= self.cards.len() {
                return Err(SnapshotError::UnknownMatched(uid));
            }
            matched.insert(uid);
        }
        for &uid in &matched {
            let card = &self.cards[uid.index()];
            let partner_matched = self
                .cards
                .iter()
                .any(|other| card.pairs_with(other) && matched.contains(&other.uid));
            if !partner_matched {
                return Err(SnapshotError::HalfMatched(uid));
            }
        }
        if matched.len() == self.cards.len() {
            return Err(SnapshotError::AlreadyWon);
        }

        Ok(RoundState::resumed(round, RoundSelection::from_items(items), self.cards, matched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::round::{compose_round, deal_cards, FaceState};
    use crate::theme::{ItemDisplay, Theme, ThemeItem};

    fn config() -> GameConfig {
        let theme = Theme::new(
            "test",
            (1..=4).map(|i| ThemeItem::new(ItemId::new(i), ItemDisplay::emoji("?"), format!("Item {}", i))),
        )
        .unwrap();
        GameConfig::new(theme).with_pairs(3)
    }

    fn fresh_round(config: &GameConfig) -> RoundState {
        let mut rng = GameRng::new(11);
        let selection = compose_round(config.theme.items(), config.pairs, &config.pinned, &mut rng);
        let cards = deal_cards(&selection, config.pair_rule, &mut rng);
        RoundState::new(RoundId(1), selection, cards)
    }

    fn first_pair(state: &RoundState) -> (CardUid, CardUid) {
        let first = state.card(CardUid::new(0)).unwrap().clone();
        let partner = state.cards().iter().find(|c| first.pairs_with(c)).unwrap();
        (first.uid, partner.uid)
    }

    fn with_one_pair(config: &GameConfig) -> RoundState {
        let mut state = fresh_round(config);
        let (a, b) = first_pair(&state);
        state.flip(a);
        state.flip(b);
        state.settle_match(a, b);
        state
    }

    #[test]
    fn test_capture_and_restore() {
        let config = config();
        let state = with_one_pair(&config);

        let raw = Snapshot::capture(&state).encode().unwrap();
        let restored = Snapshot::decode(&raw).unwrap().into_round(&config, RoundId(2)).unwrap();

        assert_eq!(restored.round(), RoundId(2));
        assert_eq!(restored.matched(), state.matched());
        assert_eq!(restored.selection(), state.selection());
        assert_eq!(restored.progress().matched_pairs, 1);
        assert!(restored.invariants_hold());
    }

    #[test]
    fn test_flipped_fields_are_ignored() {
        let config = config();
        let state = with_one_pair(&config);
        let unmatched = state.cards().iter().find(|c| !state.is_matched(c.uid)).unwrap().uid;

        let mut value: serde_json::Value = serde_json::from_str(&Snapshot::capture(&state).encode().unwrap()).unwrap();
        value["flipped"] = serde_json::json!([unmatched.raw()]);
        value["processing"] = serde_json::json!(true);
        value["cards"][unmatched.index()]["face"] = serde_json::json!("Flipped");

        let restored = Snapshot::decode(&value.to_string()).unwrap().into_round(&config, RoundId(2)).unwrap();

        assert!(restored.flipped().is_empty());
        assert!(!restored.is_processing());
        assert_eq!(restored.card(unmatched).unwrap().face, FaceState::Hidden);
    }

    #[test]
    fn test_encode_omits_transient_fields() {
        let config = config();
        let raw = Snapshot::capture(&fresh_round(&config)).encode().unwrap();
        assert!(!raw.contains("processing"));
        assert!(!raw.contains("flipped"));
    }

    #[test]
    fn test_rejects_garbage_and_versions() {
        assert!(matches!(Snapshot::decode("{not json"), Err(SnapshotError::Json(_))));

        let config = config();
        let mut snapshot = Snapshot::capture(&fresh_round(&config));
        snapshot.version = 99;
        let raw = serde_json::to_string(&snapshot).unwrap();
        assert!(matches!(
            Snapshot::decode(&raw),
            Err(SnapshotError::VersionMismatch { found: 99, expected: 1 })
        ));
    }

    #[test]
    fn test_rejects_foreign_shapes() {
        let config = config();
        let snapshot = Snapshot::capture(&with_one_pair(&config));

        let mut short = snapshot.clone();
        short.round_items.pop();
        assert!(matches!(
            short.into_round(&config, RoundId(2)),
            Err(SnapshotError::WrongRoundSize { found: 2, expected: 3 })
        ));

        let mut unknown = snapshot.clone();
        unknown.round_items[0] = ItemId::new(40);
        assert!(matches!(
            unknown.into_round(&config, RoundId(2)),
            Err(SnapshotError::UnknownItem(ItemId(40)))
        ));

        let mut stray = snapshot.clone();
        stray.matched.push(CardUid::new(60));
        assert!(matches!(
            stray.into_round(&config, RoundId(2)),
            Err(SnapshotError::UnknownMatched(CardUid(60)))
        ));
    }

    #[test]
    fn test_rejects_half_pairs() {
        let config = config();
        let mut snapshot = Snapshot::capture(&with_one_pair(&config));
        snapshot.matched.truncate(1);

        assert!(matches!(
            snapshot.into_round(&config, RoundId(2)),
            Err(SnapshotError::HalfMatched(_))
        ));
    }

    #[test]
    fn test_rejects_won_round() {
        let config = config();
        let mut snapshot = Snapshot::capture(&fresh_round(&config));
        snapshot.matched = snapshot.cards.iter().map(|c| c.uid).collect();

        assert!(matches!(snapshot.into_round(&config, RoundId(2)), Err(SnapshotError::AlreadyWon)));
    }
}
