//! Note List Component

use leptos::prelude::*;

use crate::components::NoteCard;
use crate::context::use_list_context;
use crate::store::store_visible_notes;

/// Filtered note list, rebuilt whenever the cache or filter changes
#[component]
pub fn NoteList() -> impl IntoView {
    let ctx = use_list_context();

    view! {
        <div id="notes-list">
            {move || {
                let notes = store_visible_notes(&ctx.store);
                if notes.is_empty() {
                    view! { <div class="no-notes-message">"No notes yet"</div> }.into_any()
                } else {
                    notes.into_iter()
                        .map(|note| view! { <NoteCard note=note /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
