//! Round composition: which items appear this round.

use crate::core::{GameRng, ItemId};
use crate::theme::ThemeItem;

/// The N items chosen for one round, pinned items first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSelection {
    items: Vec<ThemeItem>,
}

impl RoundSelection {
    /// Wrap an already-chosen list of items.
    #[must_use]
    pub fn from_items(items: Vec<ThemeItem>) -> Self {
        Self { items }
    }

    /// Items in selection order.
    #[must_use]
    pub fn items(&self) -> &[ThemeItem] {
        &self.items
    }

    /// Item ids in selection order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// Number of items (pairs) in the round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Is this item part of the round?
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Look up a selected item.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ThemeItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Choose `n` items from `pool`, always including `pinned`.
///
/// Pinned items come first in the order given; the rest are the first
/// `n - pinned.len()` of an unbiased shuffle of the remaining pool.
///
/// # Panics
///
/// Panics if `n > pool.len()`, if more items are pinned than fit, or if
/// a pinned id is missing from the pool or repeated. These are caller
/// bugs; `GameConfig::validate` rejects such configurations up front.
pub fn compose_round(pool: &[ThemeItem], n: usize, pinned: &[ItemId], rng: &mut GameRng) -> RoundSelection {
    assert!(n <= pool.len(), "Round of {} items drawn from a pool of {}", n, pool.len());
    assert!(pinned.len() <= n, "{} pinned items do not fit in a round of {}", pinned.len(), n);

    let mut items = Vec::with_capacity(n);
    for (i, &id) in pinned.iter().enumerate() {
        assert!(!pinned[..i].contains(&id), "Item {} pinned twice", id);
        let item = pool
            .iter()
            .find(|item| item.id == id)
            .unwrap_or_else(|| panic!("Pinned item {} is not in the pool", id));
        items.push(item.clone());
    }

    let mut rest: Vec<&ThemeItem> = pool.iter().filter(|item| !pinned.contains(&item.id)).collect();
    rng.shuffle(&mut rest);
    items.extend(rest.into_iter().take(n - pinned.len()).cloned());

    debug_assert_eq!(items.len(), n);
    RoundSelection { items }
}
