//! Shopping List App
//!
//! Root component: wires the list manager into context and lays out the page.

use leptos::prelude::*;

use crate::components::{DeleteAllButton, NewItemForm, ShoppingListView};
use crate::context::ListManager;
use crate::store::ShoppingList;

#[component]
pub fn App() -> impl IntoView {
    // State
    let list = RwSignal::new(ShoppingList::new());

    // Provide the manager to all children
    provide_context(ListManager::new(list));

    view! {
        <main class="container">
            <h1>"Shopping List"</h1>

            <NewItemForm />

            <ShoppingListView />

            <DeleteAllButton />
        </main>
    }
}
