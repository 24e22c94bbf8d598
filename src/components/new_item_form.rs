//! New Item Form Component
//!
//! Form that appends a shopping list item on submit.

use leptos::prelude::*;

use crate::context::{use_list_manager, ListManager};

/// Runs on submit: keeps the page from navigating, then adds the item
fn handle_submit(manager: ListManager, text: String, prevent_default: impl FnOnce()) {
    prevent_default();
    manager.submit_new_item(text);
}

/// Form with a single text input for new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let manager = use_list_manager();

    let (new_text, set_new_text) = signal(String::new());

    let submit_item = move |ev: web_sys::SubmitEvent| {
        handle_submit(manager, new_text.get_untracked(), || ev.prevent_default());
    };

    view! {
        <form id="newItemForm" class="new-item-form" on:submit=submit_item>
            <div class="new-item-row">
                <input
                    type="text"
                    id="newItemInput"
                    class="form-control"
                    placeholder="Add new item..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add"</button>
            </div>
        </form>
    }
}
