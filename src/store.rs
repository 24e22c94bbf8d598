//! Shopping List Store
//!
//! The ordered sequence of items shown on the page. Display order is
//! creation order; there is no reordering.

use crate::models::{ItemKey, ShoppingListItem};

/// Ordered collection of shopping list items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
    next_key: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Operations
    // ========================

    /// Append a new unchecked item. Any text is accepted, including "".
    pub fn submit_new_item(&mut self, text: impl Into<String>) -> ItemKey {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        self.items.push(ShoppingListItem::new(key, text.into()));
        key
    }

    /// Set the item's status. Returns false if the key is stale.
    pub fn toggle_status(&mut self, key: ItemKey, checked: bool) -> bool {
        match self.get_mut(key) {
            Some(item) => {
                item.set_completed(checked);
                true
            }
            None => false,
        }
    }

    /// Replace the item's text. Returns false if the key is stale.
    pub fn edit_text(&mut self, key: ItemKey, text: impl Into<String>) -> bool {
        match self.get_mut(key) {
            Some(item) => {
                item.set_text(text.into());
                true
            }
            None => false,
        }
    }

    /// Remove exactly one item, returning it
    pub fn delete_item(&mut self, key: ItemKey) -> Option<ShoppingListItem> {
        let index = self.items.iter().position(|item| item.key() == key)?;
        Some(self.items.remove(index))
    }

    /// Remove every item regardless of status. Returns how many were removed.
    pub fn delete_all(&mut self) -> usize {
        let removed = self.len();
        self.items.clear();
        removed
    }

    // ========================
    // Queries
    // ========================

    pub fn get(&self, key: ItemKey) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    fn get_mut(&mut self, key: ItemKey) -> Option<&mut ShoppingListItem> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingListItem> {
        self.items.iter()
    }

    /// Keys in display order
    pub fn keys(&self) -> Vec<ItemKey> {
        self.iter().map(ShoppingListItem::key).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
