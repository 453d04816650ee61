//! Note Card Component
//!
//! One row of the note list: title, chips, date, content, kebab menu and topics.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::color::{pick_color_for, NOTE_PALETTE};
use crate::components::{CategoryChip, TopicChecklist};
use crate::context::use_list_context;
use crate::format::{escape_html, format_date_us};
use crate::models::Note;

/// Clickable note card
#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let ctx = use_list_context();
    let navigate = use_navigate();

    let background = pick_color_for(NOTE_PALETTE, &note.color_key());
    let categories = note.effective_categories();
    let created = format_date_us(&note.created_at);
    let content_html = escape_html(note.content());
    let topics = note.topics().to_vec();
    let path = note.detail_path();
    let title = note.title.clone();

    let menu_id = note.id.clone();
    let is_open = move || ctx.open_menu.with(|open| open.as_ref() == Some(&menu_id));

    // The button and menu stop propagation so the card click does not fire
    // and the window listener does not close the menu again.
    let toggle_id = note.id.clone();
    let toggle_menu = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.open_menu.update(|open| {
            *open = if open.as_ref() == Some(&toggle_id) { None } else { Some(toggle_id.clone()) };
        });
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.open_menu.set(None);
        ctx.delete_note(&note);
    };

    view! {
        <div
            class="note"
            style=format!("background: {}; color: #1f2937; cursor: pointer;", background)
            on:click=move |_| navigate(&path, Default::default())
        >
            <h4>{title.clone()}</h4>
            <div class="meta">
                {categories.into_iter().map(|name| view! {
                    <CategoryChip name=name palette=NOTE_PALETTE />
                    " "
                }).collect_view()}
                "• " {created}
            </div>
            <p inner_html=content_html></p>
            <div class="note-actions">
                <button
                    class="note-action-btn"
                    aria-label=format!("Actions for {}", title)
                    on:click=toggle_menu
                >
                    "⋯"
                </button>
                <div class=move || if is_open() { "note-menu open" } else { "note-menu" }>
                    <button class="note-menu-item" on:click=on_delete>"Delete"</button>
                </div>
            </div>
            <TopicChecklist topics=topics />
        </div>
    }
}
