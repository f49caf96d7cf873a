//! Round state: the cards and the flip/match bookkeeping.
//!
//! Uses `im` persistent structures so hosts can hold a cheap clone of the
//! state (for rendering) while the engine keeps mutating its own.
//!
//! ## Invariants
//!
//! - at most two cards are in the flipped buffer
//! - a card is never both flipped and matched
//! - the matched set grows two cards at a time
//! - the round is won exactly when every card is matched

use im::{OrdSet, Vector};
use smallvec::SmallVec;

use crate::core::{CardUid, RoundId};
use crate::round::{Card, FaceState, RoundSelection};

/// Observed phase of the flip state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MachineState {
    /// Nothing face up, waiting for a first card.
    Idle,
    /// One card face up, waiting for a second.
    OneFlipped,
    /// Two cards face up, waiting for the resolution timer.
    Resolving,
}

/// Pairs found so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Progress {
    /// Pairs matched so far.
    pub matched_pairs: usize,
    /// Pairs in the round.
    pub total_pairs: usize,
}

impl Progress {
    /// Is every pair found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    /// Completion as a percentage, for fill indicators.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        self.matched_pairs as f64 / self.total_pairs as f64 * 100.0
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.matched_pairs, self.total_pairs)
    }
}

/// Everything about the round in play.
#[derive(Clone, Debug)]
pub struct RoundState {
    round: RoundId,
    selection: RoundSelection,
    cards: Vector<Card>,
    flipped: SmallVec<[CardUid; 2]>,
    matched: OrdSet<CardUid>,
    processing: bool,
    celebrated: bool,
}

impl RoundState {
    /// A freshly dealt round: nothing flipped, nothing matched.
    #[must_use]
    pub fn new(round: RoundId, selection: RoundSelection, cards: Vec<Card>) -> Self {
        Self::resumed(round, selection, cards, OrdSet::new())
    }

    /// A round resumed part-way through.
    ///
    /// Face states are derived from `matched`; anything that was face up
    /// but unmatched goes back face down, and the buffer and lock start
    /// clear.
    #[must_use]
    pub fn resumed(round: RoundId, selection: RoundSelection, cards: Vec<Card>, matched: OrdSet<CardUid>) -> Self {
        let cards = cards
            .into_iter()
            .map(|mut card| {
                card.face = if matched.contains(&card.uid) {
                    FaceState::Matched
                } else {
                    FaceState::Hidden
                };
                card
            })
            .collect();

        Self {
            round,
            selection,
            cards,
            flipped: SmallVec::new(),
            matched,
            processing: false,
            celebrated: false,
        }
    }

    // === Readers ===

    /// Which round this is.
    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    /// The items dealt this round.
    #[must_use]
    pub fn selection(&self) -> &RoundSelection {
        &self.selection
    }

    /// All cards, indexed by uid.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Get a card by uid.
    #[must_use]
    pub fn card(&self, uid: CardUid) -> Option<&Card> {
        self.cards.get(uid.index())
    }

    /// Cards face up awaiting judgment, in flip order.
    #[must_use]
    pub fn flipped(&self) -> &[CardUid] {
        &self.flipped
    }

    /// Cards in found pairs.
    #[must_use]
    pub fn matched(&self) -> &OrdSet<CardUid> {
        &self.matched
    }

    /// Is a card in the flipped buffer?
    #[must_use]
    pub fn is_flipped(&self, uid: CardUid) -> bool {
        self.flipped.contains(&uid)
    }

    /// Is a card part of a found pair?
    #[must_use]
    pub fn is_matched(&self, uid: CardUid) -> bool {
        self.matched.contains(&uid)
    }

    /// Is a pair awaiting judgment?
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Pairs in the round (N).
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Pairs found so far.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            matched_pairs: self.matched.len() / 2,
            total_pairs: self.total_pairs(),
        }
    }

    /// Has every card been matched?
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.cards.is_empty() && self.matched.len() == self.cards.len()
    }

    /// Has the win sequence already run?
    #[must_use]
    pub fn is_celebrated(&self) -> bool {
        self.celebrated
    }

    /// Current phase of the flip state machine.
    #[must_use]
    pub fn machine_state(&self) -> MachineState {
        match (self.flipped.len(), self.processing) {
            (0, false) => MachineState::Idle,
            (1, false) => MachineState::OneFlipped,
            _ => MachineState::Resolving,
        }
    }

    /// Check every structural invariant.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let buffer_ok = self.flipped.len() <= 2 && self.flipped.iter().all(|uid| !self.matched.contains(uid));
        let lock_ok = self.processing == (self.flipped.len() == 2);
        let pairs_ok = self.matched.len() % 2 == 0;
        let faces_ok = self.cards.iter().enumerate().all(|(pos, card)| {
            let expected = if self.matched.contains(&card.uid) {
                FaceState::Matched
            } else if self.flipped.contains(&card.uid) {
                FaceState::Flipped
            } else {
                FaceState::Hidden
            };
            card.uid.index() == pos && card.face == expected
        });
        buffer_ok && lock_ok && pairs_ok && faces_ok
    }

    // === Transitions (engine only) ===

    /// Turn a card face up and push it onto the buffer.
    pub(crate) fn flip(&mut self, uid: CardUid) {
        debug_assert!(self.flipped.len() < 2 && !self.processing);
        self.flipped.push(uid);
        self.set_face(uid, FaceState::Flipped);
        if self.flipped.len() == 2 {
            self.processing = true;
        }
    }

    /// Resolve the buffered pair as a match.
    pub(crate) fn settle_match(&mut self, first: CardUid, second: CardUid) {
        debug_assert_eq!(self.flipped.as_slice(), &[first, second]);
        for uid in [first, second] {
            self.matched.insert(uid);
            self.set_face(uid, FaceState::Matched);
        }
        self.release();
    }

    /// Resolve the buffered pair as a mismatch.
    pub(crate) fn settle_mismatch(&mut self, first: CardUid, second: CardUid) {
        debug_assert_eq!(self.flipped.as_slice(), &[first, second]);
        for uid in [first, second] {
            self.set_face(uid, FaceState::Hidden);
        }
        self.release();
    }

    /// Record that the win sequence ran. Returns false if it already had.
    pub(crate) fn mark_celebrated(&mut self) -> bool {
        !std::mem::replace(&mut self.celebrated, true)
    }

    fn release(&mut self) {
        self.flipped.clear();
        self.processing = false;
    }

    fn set_face(&mut self, uid: CardUid, face: FaceState) {
        if let Some(card) = self.cards.get_mut(uid.index()) {
            card.face = face;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ItemId;
    use crate::round::CardKind;

    /// Items 1,2 dealt as [1, 2, 1, 2].
    fn state() -> RoundState {
        let cards = [1, 2, 1, 2]
            .iter()
            .enumerate()
            .map(|(pos, &item)| Card::new(CardUid::new(pos as u32), ItemId::new(item), CardKind::Twin))
            .collect();
        RoundState::new(RoundId(1), RoundSelection::from_items(Vec::new()), cards)
    }

    fn uid(n: u32) -> CardUid {
        CardUid::new(n)
    }

    #[test]
    fn test_new_state() {
        let state = state();

        assert_eq!(state.machine_state(), MachineState::Idle);
        assert_eq!(state.progress(), Progress { matched_pairs: 0, total_pairs: 2 });
        assert!(!state.is_won());
        assert!(state.invariants_hold());
    }

    #[test]
    fn test_flip_and_match() {
        let mut state = state();

        state.flip(uid(0));
        assert_eq!(state.machine_state(), MachineState::OneFlipped);
        assert_eq!(state.card(uid(0)).unwrap().face, FaceState::Flipped);

        state.flip(uid(2));
        assert_eq!(state.machine_state(), MachineState::Resolving);
        assert!(state.is_processing());
        assert!(state.invariants_hold());

        state.settle_match(uid(0), uid(2));
        assert_eq!(state.machine_state(), MachineState::Idle);
        assert!(state.is_matched(uid(0)) && state.is_matched(uid(2)));
        assert_eq!(state.card(uid(2)).unwrap().face, FaceState::Matched);
        assert_eq!(state.progress().matched_pairs, 1);
        assert!(state.invariants_hold());
    }

    #[test]
    fn test_flip_and_mismatch() {
        let mut state = state();

        state.flip(uid(0));
        state.flip(uid(1));
        state.settle_mismatch(uid(0), uid(1));

        assert_eq!(state.machine_state(), MachineState::Idle);
        assert!(state.matched().is_empty());
        assert_eq!(state.card(uid(0)).unwrap().face, FaceState::Hidden);
        assert_eq!(state.card(uid(1)).unwrap().face, FaceState::Hidden);
        assert!(state.invariants_hold());
    }

    #[test]
    fn test_win_and_celebrate_once() {
        let mut state = state();
        state.flip(uid(0));
        state.flip(uid(2));
        state.settle_match(uid(0), uid(2));
        state.flip(uid(3));
        state.flip(uid(1));
        state.settle_match(uid(3), uid(1));

        assert!(state.is_won());
        assert!(state.progress().is_complete());
        assert!(state.mark_celebrated());
        assert!(!state.mark_celebrated());
        assert!(state.is_celebrated());
    }

    #[test]
    fn test_resumed_recomputes_faces() {
        let mut cards: Vec<Card> = state().cards().iter().cloned().collect();
        cards[1].face = FaceState::Flipped;
        let matched: OrdSet<CardUid> = [uid(0), uid(2)].into_iter().collect();

        let state = RoundState::resumed(RoundId(2), RoundSelection::from_items(Vec::new()), cards, matched);

        assert_eq!(state.card(uid(0)).unwrap().face, FaceState::Matched);
        assert_eq!(state.card(uid(1)).unwrap().face, FaceState::Hidden);
        assert!(state.flipped().is_empty());
        assert!(!state.is_processing());
        assert!(state.invariants_hold());
    }

    #[test]
    fn test_progress_display() {
        let progress = Progress { matched_pairs: 2, total_pairs: 6 };
        assert_eq!(progress.to_string(), "2 / 6");
        assert!((progress.percent() - 33.333).abs() < 0.01);
        assert_eq!(Progress { matched_pairs: 0, total_pairs: 0 }.percent(), 0.0);
    }
}
