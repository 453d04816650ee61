//! Notes Frontend App
//!
//! Router with the list, creation and detail pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{ListView, NewNoteForm, NoteDetail};
use crate::config::Config;

#[component]
pub fn App(config: Config) -> impl IntoView {
    log::info!("using API at {}", config.api_base);
    provide_context(config);

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=ListView />
                    <Route path=path!("/notes/new") view=NewNoteForm />
                    <Route path=path!("/notes/:id") view=NoteDetail />
                </Routes>
            </main>
        </Router>
    }
}
