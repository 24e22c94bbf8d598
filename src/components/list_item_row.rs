//! List Item Row Component
//!
//! One `<li>` of the shopping list: status checkbox, text field, delete button.

use leptos::prelude::*;

use crate::context::use_list_manager;
use crate::models::ItemKey;

/// A single item row
#[component]
pub fn ListItemRow(item: ItemKey) -> impl IntoView {
    let manager = use_list_manager();

    view! {
        <li class="shopping-list-item">
            // Status
            <input
                type="checkbox"
                class="item-status-checkbox"
                prop:checked=move || manager.is_completed(item)
                on:change=move |ev| manager.toggle_status(item, event_target_checked(&ev))
            />

            // Text, read-only while completed
            <input
                type="text"
                class="item-text form-control"
                data-item-text="true"
                prop:value=move || manager.text(item)
                disabled=move || !manager.is_editable(item)
                on:input=move |ev| manager.edit_text(item, event_target_value(&ev))
            />

            <button
                class="btn-delete-item close text-danger"
                on:click=move |_| manager.delete_item(item)
            >
                <span>"×"</span>
            </button>
        </li>
    }
}
