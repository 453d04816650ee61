//! Note Detail Component
//!
//! Single-note page with toggleable checklist topics.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::color::{pick_color_for, NOTE_PALETTE};
use crate::components::CategoryChip;
use crate::config::use_config;
use crate::dialog;
use crate::format::{escape_html, format_date_us};
use crate::models::{Note, NoteId, NotePatch, Topic};

/// Copy of `topics` with entry `index` flipped
pub fn toggled_topics(topics: &[Topic], index: usize) -> Vec<Topic> {
    let mut topics = topics.to_vec();
    if let Some(topic) = topics.get_mut(index) {
        topic.done = !topic.done;
    }
    topics
}

/// Patch flipping topic `index`, or None while an earlier toggle is still saving
pub fn toggle_patch(note: &Note, index: usize, saving: bool) -> Option<NotePatch> {
    if saving {
        return None;
    }
    Some(NotePatch {
        topics: Some(toggled_topics(note.topics(), index)),
        ..Default::default()
    })
}

/// Detail page for `/notes/:id`
#[component]
pub fn NoteDetail() -> impl IntoView {
    let config = use_config();
    let params = use_params_map();

    let (note, set_note) = signal(None::<Note>);
    let (error, set_error) = signal(None::<String>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (saving, set_saving) = signal(false);

    let note_id = move || params.read().get("id").map(|raw| NoteId::from(raw.as_str()));

    let load_config = config.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(id) = note_id() else {
            return;
        };
        let config = load_config.clone();
        spawn_local(async move {
            match api::get_note(&config, &id).await {
                Ok(loaded) => {
                    set_error.set(None);
                    set_note.set(Some(loaded));
                }
                Err(err) if err.is_not_found() => set_error.set(Some("Note not found".to_string())),
                Err(err) => {
                    log::error!("loading note {} failed: {}", id, err);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    });

    // Send the whole checklist back with one entry flipped, then re-fetch.
    // One PATCH at a time so a second toggle never builds on a stale note.
    let toggle_topic = move |index: usize| {
        let Some(current) = note.get_untracked() else {
            return;
        };
        let Some(patch) = toggle_patch(&current, index, saving.get_untracked()) else {
            return;
        };
        set_saving.set(true);
        let config = config.clone();
        spawn_local(async move {
            match api::update_note(&config, &current.id, &patch).await {
                Ok(_) => set_reload_trigger.update(|v| *v += 1),
                Err(err) => dialog::alert(&format!("Update failed: {}", err)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="note-detail-page">
            <a href="/" class="back-link">"← All notes"</a>
            {move || error.get().map(|message| view! { <p class="error-message">{message}</p> })}
            {move || note.get().map(|n| {
                let background = pick_color_for(NOTE_PALETTE, &n.color_key());
                let topics = n.topics().to_vec();
                let toggle_topic = toggle_topic.clone();
                view! {
                    <article class="note-detail" style=format!("background: {};", background)>
                        <h2>{n.title.clone()}</h2>
                        <div class="meta">
                            {n.effective_categories().into_iter().map(|name| view! {
                                <CategoryChip name=name palette=NOTE_PALETTE />
                                " "
                            }).collect_view()}
                            "• " {format_date_us(&n.created_at)}
                        </div>
                        <p inner_html=escape_html(n.content())></p>
                        <ul class="topics editable">
                            {topics.into_iter().enumerate().map(|(index, topic)| {
                                let toggle_topic = toggle_topic.clone();
                                view! {
                                    <li>
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=topic.done
                                                disabled=move || saving.get()
                                                on:change=move |_| toggle_topic(index)
                                            />
                                            " " {topic.text}
                                        </label>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </article>
                }
            })}
        </div>
    }
}
