//! The built-in game skins.
//!
//! Seven themed decks share one engine and differ only in configuration:
//!
//! | Variant | Pool | Pinned | Pairs | Resume | Win delay |
//! |---------|------|--------|-------|--------|-----------|
//! | Animal  | 6    | -      | twins | yes    | 500ms     |
//! | Dino    | 9    | -      | twins | yes    | 500ms     |
//! | Family  | 9    | Benjamine, Christopher | twins | no | 500ms |
//! | Flag    | 9    | -      | twins | no     | 600ms     |
//! | Food    | 9    | -      | twins | no     | 500ms     |
//! | Fruit   | 6    | -      | twins | no     | 600ms     |
//! | Number  | 6    | -      | numeral/dice | no | 500ms  |

mod catalogs;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig, ItemId, Timings};
use crate::round::PairRule;
use crate::theme::Theme;

/// Family members in every family round.
const FAMILY_PINNED: [&str; 2] = ["Benjamine", "Christopher"];

/// One of the built-in skins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    Animal,
    Dino,
    Family,
    Flag,
    Food,
    Fruit,
    Number,
}

impl GameVariant {
    /// Every built-in skin.
    pub const ALL: [GameVariant; 7] = [
        GameVariant::Animal,
        GameVariant::Dino,
        GameVariant::Family,
        GameVariant::Flag,
        GameVariant::Food,
        GameVariant::Fruit,
        GameVariant::Number,
    ];

    /// Directory the skin is served from (`""` for the root game).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            GameVariant::Animal => "",
            GameVariant::Dino => "dino-match",
            GameVariant::Family => "family-match",
            GameVariant::Flag => "flag-match",
            GameVariant::Food => "food-match",
            GameVariant::Fruit => "fruit-match",
            GameVariant::Number => "number-match",
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            GameVariant::Animal => "Animal Match",
            GameVariant::Dino => "Dino Match",
            GameVariant::Family => "Family Match",
            GameVariant::Flag => "Flag Match",
            GameVariant::Food => "Food Match",
            GameVariant::Fruit => "Fruit Match",
            GameVariant::Number => "Number Match",
        }
    }

    /// The skin's item catalog.
    pub fn theme(self) -> Result<Theme, ConfigError> {
        match self {
            GameVariant::Animal => catalogs::animals(),
            GameVariant::Dino => catalogs::dinos(),
            GameVariant::Family => catalogs::family(),
            GameVariant::Flag => catalogs::flags(),
            GameVariant::Food => catalogs::foods(),
            GameVariant::Fruit => catalogs::fruits(),
            GameVariant::Number => catalogs::numbers(),
        }
    }

    /// Session storage key, for the skins that resume on reload.
    #[must_use]
    pub const fn storage_key(self) -> Option<&'static str> {
        match self {
            GameVariant::Animal => Some("animalMatch"),
            GameVariant::Dino => Some("dinoMatch"),
            _ => None,
        }
    }

    /// Full engine configuration for the skin.
    pub fn config(self) -> Result<GameConfig, ConfigError> {
        let theme = self.theme()?;

        let pinned = match self {
            GameVariant::Family => pinned_by_label(&theme, &FAMILY_PINNED)?,
            _ => Vec::new(),
        };

        let pair_rule = match self {
            GameVariant::Number => PairRule::NumeralPattern,
            _ => PairRule::Twins,
        };

        let timings = match self {
            GameVariant::Flag | GameVariant::Fruit => Timings::default().with_win_delay(Duration::from_millis(600)),
            _ => Timings::default(),
        };

        let mut config = GameConfig::new(theme)
            .with_pinned(pinned)
            .with_pair_rule(pair_rule)
            .with_timings(timings);
        if let Some(key) = self.storage_key() {
            config = config.with_persistence(key);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Resolve labels to item ids; every label must name an item.
fn pinned_by_label(theme: &Theme, labels: &[&str]) -> Result<Vec<ItemId>, ConfigError> {
    labels
        .iter()
        .map(|&label| {
            theme
                .find_by_label(label)
                .map(|item| item.id)
                .ok_or_else(|| ConfigError::UnknownLabel(label.to_string()))
        })
        .collect()
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
