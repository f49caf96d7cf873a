//! The match engine: one instance per game session.

use std::time::Duration;

use crate::core::{CardUid, ConfigError, GameConfig, GameRng, RoundId};
use crate::outputs::{AudioCues, Celebration, Cue, Outputs, Renderer};
use crate::persist::{MemoryStore, SessionStore, Snapshot};
use crate::round::{compose_round, deal_cards};

use super::schedule::{Scheduled, Scheduler, Task};
use super::state::{MachineState, Progress, RoundState};

/// Why a card selection did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// No card with that uid in this round.
    UnknownCard,
    /// Every pair is already found.
    RoundWon,
    /// A pair is awaiting judgment.
    Processing,
    /// The card is already face up.
    AlreadyFlipped,
    /// The card is part of a found pair.
    AlreadyMatched,
    /// Two cards are already face up.
    BufferFull,
}

/// Outcome of [`MatchEngine::select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    /// First card of a pair turned up.
    Flipped,
    /// Second card turned up; the pair resolves after a delay.
    Resolving {
        /// Whether the pair will resolve as a match.
        matched: bool,
    },
    /// Nothing happened.
    Ignored(IgnoreReason),
}

/// Page visibility as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// In the foreground.
    Visible,
    /// Backgrounded or about to unload.
    Hidden,
}

/// How [`MatchEngine::start`] got its round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Startup {
    /// An unfinished round was restored from session storage.
    Resumed,
    /// A new round was dealt.
    Fresh,
}

/// Memory-matching engine.
///
/// Owns the round state, drives the collaborators, and resolves flips
/// on a virtual clock advanced by the host.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use match_pairs::core::CardUid;
/// use match_pairs::engine::{MatchEngine, Selection};
/// use match_pairs::games::GameVariant;
///
/// let config = GameVariant::Animal.config().unwrap().with_seed(42);
/// let mut engine = MatchEngine::builder(config).build().unwrap();
/// engine.new_round();
///
/// // Find the partner of card 0 and flip both
/// let partner = engine
///     .state()
///     .cards()
///     .iter()
///     .find(|c| c.uid != CardUid::new(0) && c.item == engine.state().cards()[0].item)
///     .unwrap()
///     .uid;
///
/// assert_eq!(engine.select(CardUid::new(0)), Selection::Flipped);
/// assert_eq!(engine.select(partner), Selection::Resolving { matched: true });
///
/// engine.advance(Duration::from_millis(500));
/// assert_eq!(engine.progress().matched_pairs, 1);
/// ```
pub struct MatchEngine {
    config: GameConfig,
    rng: GameRng,
    state: RoundState,
    scheduler: Scheduler,
    outputs: Outputs,
    store: Box<dyn SessionStore>,
    last_round: RoundId,
}

/// Builder for [`MatchEngine`].
pub struct MatchEngineBuilder {
    config: GameConfig,
    outputs: Outputs,
    store: Option<Box<dyn SessionStore>>,
}

impl MatchEngineBuilder {
    /// Set every collaborator at once.
    #[must_use]
    pub fn outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }

    /// Set the renderer.
    #[must_use]
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.outputs = self.outputs.with_renderer(renderer);
        self
    }

    /// Set the audio cue player.
    #[must_use]
    pub fn audio(mut self, audio: impl AudioCues + 'static) -> Self {
        self.outputs = self.outputs.with_audio(audio);
        self
    }

    /// Set the celebration effect.
    #[must_use]
    pub fn celebration(mut self, celebration: impl Celebration + 'static) -> Self {
        self.outputs = self.outputs.with_celebration(celebration);
        self
    }

    /// Set the session store. Defaults to a private [`MemoryStore`].
    #[must_use]
    pub fn store(mut self, store: impl SessionStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Validate the configuration and build the engine.
    ///
    /// The engine starts with a round already dealt but not announced;
    /// call [`MatchEngine::start`] or [`MatchEngine::new_round`] to show it.
    pub fn build(self) -> Result<MatchEngine, ConfigError> {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let round = RoundId(1);
        let state = deal_round(&self.config, &mut rng, round);

        Ok(MatchEngine {
            config: self.config,
            rng,
            state,
            scheduler: Scheduler::new(),
            outputs: self.outputs,
            store: self.store.unwrap_or_else(|| Box::new(MemoryStore::new())),
            last_round: round,
        })
    }
}

fn deal_round(config: &GameConfig, rng: &mut GameRng, round: RoundId) -> RoundState {
    let selection = compose_round(config.theme.items(), config.pairs, &config.pinned, rng);
    let cards = deal_cards(&selection, config.pair_rule, rng);
    RoundState::new(round, selection, cards)
}

impl MatchEngine {
    /// Start building an engine for a game configuration.
    #[must_use]
    pub fn builder(config: GameConfig) -> MatchEngineBuilder {
        MatchEngineBuilder {
            config,
            outputs: Outputs::silent(),
            store: None,
        }
    }

    // === Readers ===

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The round in play.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Pairs found so far.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.state.progress()
    }

    /// Current phase of the flip state machine.
    #[must_use]
    pub fn machine_state(&self) -> MachineState {
        self.state.machine_state()
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Current virtual clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of scheduled resolutions not yet run.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// When the next scheduled resolution is due, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    // === Round lifecycle ===

    /// Resume an unfinished round if one was saved, else deal a new one.
    pub fn start(&mut self) -> Startup {
        if self.restore_snapshot() {
            Startup::Resumed
        } else {
            self.new_round();
            Startup::Fresh
        }
    }

    /// Abandon the current round and deal a new one, with the welcome cue.
    ///
    /// Pending resolutions are cancelled and any saved snapshot is deleted.
    pub fn new_round(&mut self) {
        self.deal_next(true);
    }

    /// Like [`new_round`](Self::new_round), without the welcome cue.
    ///
    /// For the in-game "new game" control; `start` and "play again" use
    /// `new_round`.
    pub fn restart(&mut self) {
        self.deal_next(false);
    }

    fn deal_next(&mut self, announce: bool) {
        let dropped = self.scheduler.cancel_round(self.state.round());
        if dropped > 0 {
            log::trace!("Cancelled {} pending tasks of {}", dropped, self.state.round());
        }
        self.clear_snapshot();

        let round = self.next_round_id();
        self.state = deal_round(&self.config, &mut self.rng, round);
        log::debug!(
            "{}: dealt {} cards from theme '{}'",
            round,
            self.state.cards().len(),
            self.config.theme.name()
        );

        if announce {
            self.outputs.cue(Cue::Welcome);
        }
        self.outputs.renderer.redraw(&self.state);
        self.outputs.renderer.progress(self.state.progress());
    }

    fn next_round_id(&mut self) -> RoundId {
        self.last_round = self.last_round.next();
        self.last_round
    }

    // === Input ===

    /// A card was selected by the player.
    ///
    /// Selections that make no sense right now (during resolution, on a
    /// face-up card, after the win) are ignored without side effects.
    pub fn select(&mut self, uid: CardUid) -> Selection {
        if let Some(reason) = self.reject(uid) {
            log::trace!("{}: ignored selection of {} ({:?})", self.state.round(), uid, reason);
            return Selection::Ignored(reason);
        }

        self.outputs.cue(Cue::Pop);
        self.state.flip(uid);
        self.outputs.renderer.flip(uid);

        let &[first, second] = self.state.flipped() else {
            return Selection::Flipped;
        };

        let matched = match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };
        let round = self.state.round();
        let timings = self.config.timings;
        if matched {
            self.scheduler
                .schedule(timings.match_delay, round, Task::ResolveMatch { first, second });
        } else {
            self.scheduler
                .schedule(timings.mismatch_delay, round, Task::ResolveMismatch { first, second });
        }

        Selection::Resolving { matched }
    }

    fn reject(&self, uid: CardUid) -> Option<IgnoreReason> {
        if self.state.card(uid).is_none() {
            Some(IgnoreReason::UnknownCard)
        } else if self.state.is_won() {
            Some(IgnoreReason::RoundWon)
        } else if self.state.is_processing() {
            Some(IgnoreReason::Processing)
        } else if self.state.is_flipped(uid) {
            Some(IgnoreReason::AlreadyFlipped)
        } else if self.state.is_matched(uid) {
            Some(IgnoreReason::AlreadyMatched)
        } else if self.state.flipped().len() >= 2 {
            Some(IgnoreReason::BufferFull)
        } else {
            None
        }
    }

    /// Page visibility changed.
    ///
    /// Going hidden saves the round, if at least one pair has been found
    /// and the round is not over.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        if visibility == Visibility::Hidden && self.state.progress().matched_pairs > 0 && !self.state.is_won() {
            self.save_snapshot();
        }
    }

    // === Clock ===

    /// Advance the virtual clock, running every resolution that falls due.
    ///
    /// Returns the number of tasks that ran (stale ones excluded).
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.scheduler.now().saturating_add(elapsed);
        let mut ran = 0;
        while let Some(job) = self.scheduler.pop_due(until) {
            if self.run(job) {
                ran += 1;
            }
        }
        self.scheduler.settle(until);
        ran
    }

    /// Advance the clock until nothing is pending.
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.scheduler.next_due() {
            let elapsed = due.saturating_sub(self.scheduler.now());
            ran += self.advance(elapsed);
        }
        ran
    }

    fn run(&mut self, job: Scheduled) -> bool {
        if job.round != self.state.round() {
            log::trace!("Dropped stale {:?} from {}", job.task, job.round);
            return false;
        }

        match job.task {
            Task::ResolveMatch { first, second } => self.resolve_match(first, second),
            Task::ResolveMismatch { first, second } => self.resolve_mismatch(first, second),
            Task::Celebrate => self.celebrate(),
        }
        true
    }

    fn resolve_match(&mut self, first: CardUid, second: CardUid) {
        self.state.settle_match(first, second);
        let progress = self.state.progress();
        log::debug!("{}: pair found ({} and {}), {}", self.state.round(), first, second, progress);

        self.outputs.cue(Cue::Match);
        self.outputs.renderer.mark_matched(first);
        self.outputs.renderer.mark_matched(second);
        self.outputs.renderer.progress(progress);

        if self.state.is_won() {
            self.clear_snapshot();
            self.scheduler
                .schedule(self.config.timings.win_delay, self.state.round(), Task::Celebrate);
        } else {
            self.save_snapshot();
        }
    }

    fn resolve_mismatch(&mut self, first: CardUid, second: CardUid) {
        self.state.settle_mismatch(first, second);
        log::debug!("{}: no match ({} and {})", self.state.round(), first, second);

        self.outputs.renderer.unflip(first);
        self.outputs.renderer.unflip(second);
    }

    fn celebrate(&mut self) {
        if !self.state.mark_celebrated() {
            return;
        }
        log::info!("{}: round won", self.state.round());

        self.outputs.cue(Cue::Win);
        self.outputs.celebration.celebrate();
        self.outputs.renderer.show_win(self.state.selection());
    }

    // === Persistence ===

    /// Save the current round to session storage. Best-effort.
    pub fn save_snapshot(&mut self) {
        let Some(key) = self.config.storage_key.as_deref() else {
            return;
        };
        if self.state.is_won() {
            return;
        }

        let result = Snapshot::capture(&self.state)
            .encode()
            .map_err(|err| err.to_string())
            .and_then(|raw| self.store.set(key, raw).map_err(|err| err.to_string()));
        if let Err(err) = result {
            log::warn!("Could not save round under '{}': {}", key, err);
        }
    }

    /// Replace the current round with a saved one.
    ///
    /// Returns whether a round was restored. Missing, unreadable and
    /// invalid snapshots all return false; invalid ones are deleted.
    pub fn restore_snapshot(&mut self) -> bool {
        let Some(key) = self.config.storage_key.clone() else {
            return false;
        };

        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(err) => {
                log::warn!("Could not read saved round '{}': {}", key, err);
                return false;
            }
        };

        let round = self.last_round.next();
        let restored = Snapshot::decode(&raw).and_then(|snapshot| snapshot.into_round(&self.config, round));
        let state = match restored {
            Ok(state) => state,
            Err(err) => {
                log::warn!("Discarding saved round '{}': {}", key, err);
                self.clear_snapshot();
                return false;
            }
        };

        self.scheduler.cancel_round(self.state.round());
        self.last_round = round;
        self.state = state;
        log::info!("{}: resumed at {}", round, self.state.progress());

        self.outputs.renderer.redraw(&self.state);
        self.outputs.renderer.progress(self.state.progress());
        true
    }

    /// Delete any saved round. Best-effort.
    pub fn clear_snapshot(&mut self) {
        let Some(key) = self.config.storage_key.as_deref() else {
            return;
        };
        if let Err(err) = self.store.delete(key) {
            log::warn!("Could not clear saved round '{}': {}", key, err);
        }
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("theme", &self.config.theme.name())
            .field("round", &self.state.round())
            .field("progress", &self.state.progress())
            .field("now", &self.scheduler.now())
            .finish_non_exhaustive()
    }
}
