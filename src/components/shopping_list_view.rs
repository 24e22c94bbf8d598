//! Shopping List View Component
//!
//! Container rendering one row per item, in creation order.

use leptos::prelude::*;

use crate::components::ListItemRow;
use crate::context::use_list_manager;

#[component]
pub fn ShoppingListView() -> impl IntoView {
    let manager = use_list_manager();

    view! {
        <ul id="shoppingList" class="shopping-list">
            <For
                each=move || manager.keys()
                key=|key| *key
                children=move |key| view! { <ListItemRow item=key /> }
            />
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tests::with_manager;
    use leptos::tachys::view::RenderHtml;

    /// Markup of each rendered `<li>`, in document order
    fn rows(html: &str) -> Vec<&str> {
        html.split(r#"<li class="shopping-list-item">"#).skip(1).collect()
    }

    #[test]
    fn test_empty_list_markup() {
        with_manager(|_| {
            let html = view! { <ShoppingListView /> }.to_html();
            assert!(html.contains(r#"id="shoppingList""#));
            assert!(rows(&html).is_empty());
        });
    }

    #[test]
    fn test_row_markup() {
        with_manager(|manager| {
            manager.submit_new_item("Milk".to_string());

            let html = view! { <ShoppingListView /> }.to_html();
            let rows = rows(&html);
            assert_eq!(rows.len(), 1);

            let row = rows[0];
            assert!(row.contains(r#"type="checkbox""#));
            assert!(row.contains(r#"class="item-status-checkbox""#));
            assert!(row.contains(r#"class="item-text form-control""#));
            assert!(row.contains(r#"data-item-text="true""#));
            assert!(row.contains(r#"class="btn-delete-item close text-danger""#));
            assert!(row.contains("<span>×</span>"));
            assert!(!row.contains("disabled"));
        });
    }

    #[test]
    fn test_rows_follow_insertion_order_and_status() {
        with_manager(|manager| {
            for text in ["Milk", "Eggs", "Bread"] {
                manager.submit_new_item(text.to_string());
            }
            let keys = manager.keys();
            manager.toggle_status(keys[0], true);
            manager.toggle_status(keys[2], true);

            let html = view! { <ShoppingListView /> }.to_html();
            let disabled: Vec<bool> = rows(&html)
                .iter()
                .map(|row| row.contains("disabled"))
                .collect();
            assert_eq!(disabled, vec![true, false, true]);
        });
    }

    #[test]
    fn test_deleted_rows_are_not_rendered() {
        with_manager(|manager| {
            manager.submit_new_item("Milk".to_string());
            manager.submit_new_item("Eggs".to_string());
            manager.toggle_status(manager.keys()[0], true);
            manager.delete_item(manager.keys()[1]);

            let html = view! { <ShoppingListView /> }.to_html();
            let rows = rows(&html);
            assert_eq!(rows.len(), 1);
            assert!(rows[0].contains("disabled"));

            manager.delete_all();
            let html = view! { <ShoppingListView /> }.to_html();
            assert!(self::rows(&html).is_empty());
        });
    }
}
