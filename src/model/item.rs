//! Inventory item data types.

use serde::{Deserialize, Serialize};

/// An inventory row as the view sees it: normalized name plus quantity.
///
/// The name doubles as the document key in the remote collection, so it is
/// unique within a snapshot. `quantity` is always at least 1 in a consistent
/// snapshot: a count that would reach zero deletes the document instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// The document payload stored remotely under an item's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub quantity: u32,
}

/// Case-insensitive substring filter over a snapshot, order preserved.
///
/// An empty query returns the whole snapshot. Pure; never touches the store.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}
