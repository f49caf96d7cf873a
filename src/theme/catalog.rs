//! Theme catalog for item lookup.
//!
//! A `Theme` stores the item pool for one game skin. It keeps catalog
//! order (selection and pinning are order-sensitive) and provides fast
//! lookup by `ItemId`.

use rustc_hash::FxHashMap;

use super::item::ThemeItem;
use crate::core::{ConfigError, ItemId};

/// Ordered item pool with id lookup.
///
/// ## Example
///
/// ```
/// use match_pairs::core::ItemId;
/// use match_pairs::theme::{ItemDisplay, Theme, ThemeItem};
///
/// let theme = Theme::new("pets", [
///     ThemeItem::new(ItemId::new(1), ItemDisplay::emoji("\u{1F436}"), "Dog"),
///     ThemeItem::new(ItemId::new(2), ItemDisplay::emoji("\u{1F431}"), "Cat"),
/// ])
/// .unwrap();
///
/// assert_eq!(theme.get(ItemId::new(2)).unwrap().label, "Cat");
/// ```
#[derive(Clone, Debug)]
pub struct Theme {
    name: String,
    items: Vec<ThemeItem>,
    index: FxHashMap<ItemId, usize>,
}

impl Theme {
    /// Create a theme from its items, in catalog order.
    ///
    /// Fails if two items share an id.
    pub fn new(
        name: impl Into<String>,
        items: impl IntoIterator<Item = ThemeItem>,
    ) -> Result<Self, ConfigError> {
        let items: Vec<ThemeItem> = items.into_iter().collect();
        let mut index = FxHashMap::default();
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id, pos).is_some() {
                return Err(ConfigError::DuplicateItem(item.id));
            }
        }

        Ok(Self {
            name: name.into(),
            items,
            index,
        })
    }

    /// Human-readable theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get an item by ID.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ThemeItem> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Check if an item ID is in the pool.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Pool size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[ThemeItem] {
        &self.items
    }

    /// Iterate over items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ThemeItem> {
        self.items.iter()
    }

    /// Find the first item with the given label.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&ThemeItem> {
        self.items.iter().find(|item| item.label == label)
    }
}
