//! New Note Form Component
//!
//! Creation page: title, content, category chips and checklist topics.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{CategoryInput, TopicEditor};
use crate::config::use_config;
use crate::dialog;
use crate::form::{build_new_note, CategoryTags, TopicRows};
use crate::models::Category;

/// Form for composing and saving a new note
#[component]
pub fn NewNoteForm() -> impl IntoView {
    let config = use_config();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let tags = RwSignal::new(CategoryTags::default());
    let typed_category = RwSignal::new(String::new());
    let topics = RwSignal::new(TopicRows::with_blank_row());
    let (suggestions, set_suggestions) = signal(Vec::<Category>::new());
    let (saving, set_saving) = signal(false);

    // Load suggestions once on mount; failures only cost the suggestions
    let suggestions_config = config.clone();
    Effect::new(move |_| {
        let config = suggestions_config.clone();
        spawn_local(async move {
            match api::list_categories(&config).await {
                Ok(loaded) => set_suggestions.set(loaded),
                Err(err) => log::debug!("category suggestions unavailable: {}", err),
            }
        });
    });

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let note = match topics.with_untracked(|rows| {
            tags.with_untracked(|chips| {
                build_new_note(
                    &title.get_untracked(),
                    &content.get_untracked(),
                    chips,
                    &typed_category.get_untracked(),
                    rows.values(),
                )
            })
        }) {
            Ok(note) => note,
            Err(err) => {
                dialog::alert(&err.to_string());
                return;
            }
        };

        set_saving.set(true);
        let config = config.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_note(&config, &note).await {
                Ok(()) => {
                    log::info!("created note \"{}\"", note.title);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    log::error!("creating note failed: {}", err);
                    set_saving.set(false);
                    dialog::alert("Failed");
                }
            }
        });
    };

    view! {
        <div class="new-note-page">
            <h1>"New note"</h1>

            <input
                id="note-title"
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />

            <textarea
                id="note-content"
                placeholder="Write something..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>

            <CategoryInput tags=tags typed=typed_category suggestions=suggestions />

            <TopicEditor rows=topics />

            <div class="form-actions">
                <a href="/" class="cancel-link">"Cancel"</a>
                <button
                    id="save-note"
                    type="button"
                    disabled=move || saving.get()
                    on:click=save
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}
