//! Collaborator seams: rendering, audio cues, celebration.
//!
//! The engine drives these; it never inspects what they do. Each one is
//! injected once at construction through [`Outputs`]. A collaborator that
//! is not supplied is a no-op, so the engine never checks for presence.
//!
//! ## Example
//!
//! ```
//! use match_pairs::outputs::{AudioCues, Cue, Outputs};
//! use match_pairs::core::OutputError;
//!
//! struct Muted;
//!
//! impl AudioCues for Muted {
//!     fn play(&mut self, _cue: Cue) -> Result<(), OutputError> {
//!         Err(OutputError::Unavailable)
//!     }
//! }
//!
//! // Failing audio is allowed: the engine logs and carries on.
//! let outputs = Outputs::silent().with_audio(Muted);
//! # let _ = outputs;
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CardUid, OutputError};
use crate::engine::{Progress, RoundState};
use crate::round::RoundSelection;

/// The four sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Any card flipped.
    Pop,
    /// A pair found.
    Match,
    /// Round complete.
    Win,
    /// Round started.
    Welcome,
}

/// Draws the board.
///
/// `redraw` is sent on round start and restore; the per-card commands
/// are incremental updates between redraws.
pub trait Renderer {
    /// Draw every card from scratch.
    fn redraw(&mut self, state: &RoundState);

    /// Turn a card face up.
    fn flip(&mut self, uid: CardUid);

    /// Turn a card face down again.
    fn unflip(&mut self, uid: CardUid);

    /// Show a card as part of a found pair.
    fn mark_matched(&mut self, uid: CardUid);

    /// Update the fill indicator and the "matched / total" label.
    fn progress(&mut self, progress: Progress);

    /// Transition to the win screen.
    fn show_win(&mut self, selection: &RoundSelection);
}

/// Fire-and-forget sound playback.
pub trait AudioCues {
    /// Start playing a cue. Errors are logged and ignored by the engine.
    fn play(&mut self, cue: Cue) -> Result<(), OutputError>;
}

/// One-shot celebratory effect (confetti). Self-terminating.
pub trait Celebration {
    /// Start the effect.
    fn celebrate(&mut self);
}

/// Collaborator that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Noop;

impl Renderer for Noop {
    fn redraw(&mut self, _state: &RoundState) {}
    fn flip(&mut self, _uid: CardUid) {}
    fn unflip(&mut self, _uid: CardUid) {}
    fn mark_matched(&mut self, _uid: CardUid) {}
    fn progress(&mut self, _progress: Progress) {}
    fn show_win(&mut self, _selection: &RoundSelection) {}
}

impl AudioCues for Noop {
    fn play(&mut self, _cue: Cue) -> Result<(), OutputError> {
        Ok(())
    }
}

impl Celebration for Noop {
    fn celebrate(&mut self) {}
}

/// The bundle of collaborators an engine drives.
pub struct Outputs {
    pub(crate) renderer: Box<dyn Renderer>,
    pub(crate) audio: Box<dyn AudioCues>,
    pub(crate) celebration: Box<dyn Celebration>,
}

impl Default for Outputs {
    fn default() -> Self {
        Self::silent()
    }
}

impl Outputs {
    /// All collaborators no-op.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            renderer: Box::new(Noop),
            audio: Box::new(Noop),
            celebration: Box::new(Noop),
        }
    }

    /// Set the renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Set the audio cue player.
    #[must_use]
    pub fn with_audio(mut self, audio: impl AudioCues + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    /// Set the celebration effect.
    #[must_use]
    pub fn with_celebration(mut self, celebration: impl Celebration + 'static) -> Self {
        self.celebration = Box::new(celebration);
        self
    }

    /// Play a cue, swallowing failures.
    pub(crate) fn cue(&mut self, cue: Cue) {
        if let Err(err) = self.audio.play(cue) {
            log::debug!("Cue {:?} not played: {}", cue, err);
        }
    }
}

impl std::fmt::Debug for Outputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outputs").finish_non_exhaustive()
    }
}
