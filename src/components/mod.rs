//! UI Components
//!
//! Thin Leptos adapters over the list manager.

mod new_item_form;
mod list_item_row;
mod shopping_list_view;
mod delete_all_button;

pub use new_item_form::NewItemForm;
pub use list_item_row::ListItemRow;
pub use shopping_list_view::ShoppingListView;
pub use delete_all_button::DeleteAllButton;

#[cfg(test)]
pub(crate) mod tests {
    use leptos::prelude::*;

    use crate::context::ListManager;
    use crate::store::ShoppingList;

    /// Run `test` inside a reactive owner with a fresh manager in context
    pub(crate) fn with_manager(test: impl FnOnce(ListManager)) {
        let owner = Owner::new();
        owner.with(|| {
            let manager = ListManager::new(RwSignal::new(ShoppingList::new()));
            provide_context(manager);
            test(manager);
        });
    }
}
