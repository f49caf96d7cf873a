//! Round setup: choosing items, dealing cards.
//!
//! - [`compose_round`]: pick N items, pinned first, rest at random
//! - [`deal_cards`]: two cards per item, shuffled, uid = position
//! - [`Card`]: one board position and its face state
//!
//! ## Example
//!
//! ```
//! use match_pairs::core::{GameRng, ItemId};
//! use match_pairs::round::{compose_round, deal_cards, PairRule};
//! use match_pairs::theme::{ItemDisplay, ThemeItem};
//!
//! let pool: Vec<_> = (1..=9)
//!     .map(|i| ThemeItem::new(ItemId::new(i), ItemDisplay::emoji("?"), format!("Item {i}")))
//!     .collect();
//! let mut rng = GameRng::new(42);
//!
//! let selection = compose_round(&pool, 6, &[ItemId::new(1), ItemId::new(2)], &mut rng);
//! let cards = deal_cards(&selection, PairRule::Twins, &mut rng);
//!
//! assert!(selection.contains(ItemId::new(1)));
//! assert_eq!(cards.len(), 12);
//! ```

mod card;
mod deal;
mod selection;

pub use card::{Card, CardKind, FaceState};
pub use deal::{check_deal, deal_cards, PairRule};
pub use selection::{compose_round, RoundSelection};
