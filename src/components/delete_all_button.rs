//! Delete All Button Component

use leptos::prelude::*;

use crate::context::use_list_manager;

/// Removes every item at once, no confirmation
#[component]
pub fn DeleteAllButton() -> impl IntoView {
    let manager = use_list_manager();

    view! {
        <button
            id="deleteAllBtn"
            type="button"
            class="btn btn-danger"
            on:click=move |_| manager.delete_all()
        >
            "Delete all"
        </button>
    }
}
