//! Game configuration types.
//!
//! Each game skin configures the one engine at startup by providing:
//! - the theme catalog to draw items from
//! - how many pairs a round has and which items are always included
//! - how a pair is derived from an item (`PairRule`)
//! - whether in-progress rounds survive a reload, and under which key
//! - the resolution delays (`Timings`)
//!
//! The engine never hardcodes a theme - skins define them.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::ids::ItemId;
use crate::round::PairRule;
use crate::theme::Theme;

/// Pairs per round used by every built-in skin (a 3x4 grid).
pub const DEFAULT_PAIRS: usize = 6;

/// Resolution delays.
///
/// These are UX pauses, not I/O waits. The mismatch delay is the longest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Pause between flipping a matching second card and marking the pair.
    pub match_delay: Duration,

    /// Pause before two mismatched cards flip back.
    pub mismatch_delay: Duration,

    /// Pause between the final match and the win sequence.
    pub win_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            match_delay: Duration::from_millis(500),
            mismatch_delay: Duration::from_millis(900),
            win_delay: Duration::from_millis(500),
        }
    }
}

impl Timings {
    /// Set the match resolution delay.
    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    /// Set the mismatch resolution delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the delay before the win sequence.
    #[must_use]
    pub fn with_win_delay(mut self, delay: Duration) -> Self {
        self.win_delay = delay;
        self
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use match_pairs::core::{GameConfig, ItemId};
/// use match_pairs::theme::{ItemDisplay, Theme, ThemeItem};
///
/// let theme = Theme::new(
///     "colors",
///     (1..=8).map(|i| ThemeItem::new(ItemId::new(i), ItemDisplay::glyph(i.to_string()), format!("Color {i}"))),
/// )
/// .unwrap();
///
/// let config = GameConfig::new(theme)
///     .with_pairs(6)
///     .with_pinned([ItemId::new(1)])
///     .with_persistence("colorMatch");
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_cards(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// The item pool rounds are drawn from.
    pub theme: Theme,

    /// Pairs per round (N).
    pub pairs: usize,

    /// Items included in every round, in this order.
    pub pinned: Vec<ItemId>,

    /// How a pair is derived from an item.
    pub pair_rule: PairRule,

    /// Session storage key. `None` disables resume-on-reload.
    pub storage_key: Option<String>,

    /// Resolution delays.
    pub timings: Timings,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with default settings for a theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            pairs: DEFAULT_PAIRS,
            pinned: Vec::new(),
            pair_rule: PairRule::Twins,
            storage_key: None,
            timings: Timings::default(),
            seed: None,
        }
    }

    /// Set the number of pairs per round.
    #[must_use]
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    /// Set the items included in every round.
    #[must_use]
    pub fn with_pinned(mut self, pinned: impl IntoIterator<Item = ItemId>) -> Self {
        self.pinned = pinned.into_iter().collect();
        self
    }

    /// Set the pair derivation rule.
    #[must_use]
    pub fn with_pair_rule(mut self, rule: PairRule) -> Self {
        self.pair_rule = rule;
        self
    }

    /// Enable resume-on-reload under the given storage key.
    #[must_use]
    pub fn with_persistence(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Set the resolution delays.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Fix the RNG seed (reproducible rounds).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cards dealt per round (2N).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.pairs * 2
    }

    /// Is resume-on-reload enabled?
    #[must_use]
    pub fn persists(&self) -> bool {
        self.storage_key.is_some()
    }

    /// Check that this configuration can always compose a full round.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pairs == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.theme.len() < self.pairs {
            return Err(ConfigError::PoolTooSmall {
                pairs: self.pairs,
                available: self.theme.len(),
            });
        }
        if self.pinned.len() > self.pairs {
            return Err(ConfigError::TooManyPinned {
                pinned: self.pinned.len(),
                pairs: self.pairs,
            });
        }

        let mut seen = FxHashSet::default();
        for &id in &self.pinned {
            if !self.theme.contains(id) {
                return Err(ConfigError::PinnedNotInTheme(id));
            }
            if !seen.insert(id) {
                return Err(ConfigError::DuplicatePinned(id));
            }
        }

        if self.pair_rule == PairRule::NumeralPattern {
            if let Some(item) = self.theme.iter().find(|item| item.pattern.is_none()) {
                return Err(ConfigError::MissingPattern(item.id));
            }
        }

        if matches!(self.storage_key.as_deref(), Some("")) {
            return Err(ConfigError::EmptyStorageKey);
        }

        Ok(())
    }
}
