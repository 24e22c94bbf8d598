//! Application Context
//!
//! The list manager shared with every component via the Leptos Context API.

use leptos::prelude::*;
use log::{debug, info};

use crate::models::ItemKey;
use crate::store::ShoppingList;

/// Owns the displayed shopping list and mediates every change to it.
///
/// Components change the list only through the operation methods below
/// and read it through the reactive accessors; they never touch the list
/// signal directly.
#[derive(Clone, Copy)]
pub struct ListManager {
    list: RwSignal<ShoppingList>,
}

impl ListManager {
    pub fn new(list: RwSignal<ShoppingList>) -> Self {
        Self { list }
    }

    /// Append a new unchecked item with the submitted text
    pub fn submit_new_item(&self, text: String) {
        if let Some(key) = self.list.try_update(|list| list.submit_new_item(text)) {
            debug!("[LIST] Added item {}", key);
        }
    }

    /// Mark an item completed (read-only) or not completed (editable)
    pub fn toggle_status(&self, key: ItemKey, checked: bool) {
        self.list.update(|list| {
            list.toggle_status(key, checked);
        });
        debug!("[LIST] Item {} checked={}", key, checked);
    }

    /// Store text typed into an item's text field
    pub fn edit_text(&self, key: ItemKey, text: String) {
        self.list.update(|list| {
            list.edit_text(key, text);
        });
    }

    pub fn delete_item(&self, key: ItemKey) {
        let removed = self.list.try_update(|list| list.delete_item(key)).flatten();
        if removed.is_some() {
            debug!("[LIST] Deleted item {}", key);
        }
    }

    pub fn delete_all(&self) {
        // Nothing to clear, so don't notify the rows
        if self.list.with_untracked(ShoppingList::is_empty) {
            return;
        }
        if let Some(count) = self.list.try_update(ShoppingList::delete_all) {
            info!("[LIST] Cleared {} items", count);
        }
    }

    // ========================
    // Reactive reads
    // ========================

    /// Keys in display order
    pub fn keys(&self) -> Vec<ItemKey> {
        self.list.with(ShoppingList::keys)
    }

    /// Text of an item, empty once the item is gone
    pub fn text(&self, key: ItemKey) -> String {
        self.list
            .with(|list| list.get(key).map(|item| item.text().to_owned()))
            .unwrap_or_default()
    }

    pub fn is_completed(&self, key: ItemKey) -> bool {
        self.list
            .with(|list| list.get(key).map(|item| item.is_completed()))
            .unwrap_or(false)
    }

    /// Whether the item's text field accepts input
    pub fn is_editable(&self, key: ItemKey) -> bool {
        self.list
            .with(|list| list.get(key).map(|item| item.is_editable()))
            .unwrap_or(false)
    }
}

/// Get the list manager from context
pub fn use_list_manager() -> ListManager {
    expect_context::<ListManager>()
}
