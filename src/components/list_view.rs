//! List View Component
//!
//! Notes page: category sidebar, mobile filter and the note list.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategorySidebar, MobileCategorySelect, NoteList};
use crate::config::use_config;
use crate::context::ListContext;
use crate::store::ListState;

/// Notes list page
#[component]
pub fn ListView() -> impl IntoView {
    let store = Store::new(ListState::default());
    let ctx = ListContext::new(store, use_config());
    provide_context(ctx);

    // Initial load of notes and categories
    Effect::new(move |_| {
        ctx.reload();
    });

    // One outside-click listener for every kebab menu, scoped to this page
    let close_menus = window_event_listener(ev::click, move |_| ctx.open_menu.set(None));
    on_cleanup(move || close_menus.remove());

    view! {
        <div class="list-layout">
            <CategorySidebar />
            <section class="notes-panel">
                <header class="notes-header">
                    <h1>"Notes"</h1>
                    <MobileCategorySelect />
                    <a href="/notes/new" class="new-note-link">"+ New note"</a>
                </header>
                <NoteList />
            </section>
        </div>
    }
}
