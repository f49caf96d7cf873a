//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use match_pairs::core::{CardUid, ItemId, OutputError};
use match_pairs::engine::{MatchEngine, Progress, RoundState};
use match_pairs::outputs::{AudioCues, Celebration, Cue, Renderer};
use match_pairs::round::RoundSelection;

/// Everything the engine told its collaborators, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    Redraw,
    Flip(CardUid),
    Unflip(CardUid),
    Matched(CardUid),
    Progress(Progress),
    ShowWin(Vec<ItemId>),
    Cue(Cue),
    Confetti,
}

/// A renderer, audio player and celebration that write to one tape.
#[derive(Clone, Default)]
pub struct Recorder {
    tape: Rc<RefCell<Vec<Signal>>>,
}

impl Recorder {
    pub fn signals(&self) -> Vec<Signal> {
        self.tape.borrow().clone()
    }

    pub fn clear(&self) {
        self.tape.borrow_mut().clear();
    }

    pub fn count(&self, wanted: &Signal) -> usize {
        self.tape.borrow().iter().filter(|s| *s == wanted).count()
    }

    pub fn cues(&self) -> Vec<Cue> {
        self.tape
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Signal::Cue(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    fn push(&self, signal: Signal) {
        self.tape.borrow_mut().push(signal);
    }
}

impl Renderer for Recorder {
    fn redraw(&mut self, _state: &RoundState) {
        self.push(Signal::Redraw);
    }

    fn flip(&mut self, uid: CardUid) {
        self.push(Signal::Flip(uid));
    }

    fn unflip(&mut self, uid: CardUid) {
        self.push(Signal::Unflip(uid));
    }

    fn mark_matched(&mut self, uid: CardUid) {
        self.push(Signal::Matched(uid));
    }

    fn progress(&mut self, progress: Progress) {
        self.push(Signal::Progress(progress));
    }

    fn show_win(&mut self, selection: &RoundSelection) {
        self.push(Signal::ShowWin(selection.ids().collect()));
    }
}

impl AudioCues for Recorder {
    fn play(&mut self, cue: Cue) -> Result<(), OutputError> {
        self.push(Signal::Cue(cue));
        Ok(())
    }
}

impl Celebration for Recorder {
    fn celebrate(&mut self) {
        self.push(Signal::Confetti);
    }
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// The card that completes `uid`'s pair.
pub fn partner_of(engine: &MatchEngine, uid: CardUid) -> CardUid {
    let card = engine.state().card(uid).expect("card in round");
    engine
        .state()
        .cards()
        .iter()
        .find(|other| card.pairs_with(other))
        .expect("every card has a partner")
        .uid
}

/// A card that does not pair with `uid`.
pub fn stranger_of(engine: &MatchEngine, uid: CardUid) -> CardUid {
    let card = engine.state().card(uid).expect("card in round");
    engine
        .state()
        .cards()
        .iter()
        .find(|other| other.uid != uid && !card.pairs_with(other))
        .expect("more than one pair in round")
        .uid
}

/// Every pair of the round, lowest uid first.
pub fn pairs(engine: &MatchEngine) -> Vec<(CardUid, CardUid)> {
    let state = engine.state();
    state
        .cards()
        .iter()
        .filter_map(|card| {
            let partner = partner_of(engine, card.uid);
            (card.uid < partner).then_some((card.uid, partner))
        })
        .collect()
}

/// Select a pair and let it resolve.
pub fn solve_pair(engine: &mut MatchEngine, first: CardUid, second: CardUid) {
    let delay = engine.config().timings.match_delay;
    engine.select(first);
    engine.select(second);
    engine.advance(delay);
}
