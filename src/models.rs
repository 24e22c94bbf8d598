//! Frontend Models
//!
//! Data structures for a single shopping list entry.

use std::fmt;

/// Opaque handle to one row of the shopping list.
///
/// Assigned when the item is created and never reused within the same list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub(crate) u64);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry of the shopping list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    key: ItemKey,
    text: String,
    completed: bool,
}

impl ShoppingListItem {
    /// Create a new, not yet completed item
    pub fn new(key: ItemKey, text: String) -> Self {
        Self {
            key,
            text,
            completed: false,
        }
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Completed items have a read-only text field
    pub fn is_editable(&self) -> bool {
        !self.completed
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = ShoppingListItem::new(ItemKey(1), "Milk".to_string());
        assert_eq!(item.key(), ItemKey(1));
        assert_eq!(item.text(), "Milk");
        assert!(!item.is_completed());
        assert!(item.is_editable());
    }

    #[test]
    fn test_editable_follows_completed() {
        let mut item = ShoppingListItem::new(ItemKey(1), "Bread".to_string());
        item.set_completed(true);
        assert!(!item.is_editable());
        item.set_completed(false);
        assert!(item.is_editable());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(ItemKey(7).to_string(), "#7");
    }
}
