//! Topic Editor Component
//!
//! Editable checklist rows for the creation form.

use leptos::html;
use leptos::prelude::*;

use crate::form::TopicRows;

/// Single topic input with its remove button
#[component]
fn TopicRowInput(
    row_id: u32,
    initial: String,
    rows: RwSignal<TopicRows>,
    focus_row: RwSignal<Option<u32>>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    // Focus once mounted if this row was just inserted via Enter
    Effect::new(move |_| {
        if focus_row.get() != Some(row_id) {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            focus_row.set(None);
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            let new_id = rows.try_update(|r| r.insert_after(row_id));
            focus_row.set(new_id);
        }
    };

    view! {
        <div class="topic-row">
            <input
                class="topic-input"
                placeholder="Topic description"
                node_ref=input_ref
                prop:value=initial
                on:input=move |ev| rows.update(|r| r.set_text(row_id, event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button
                type="button"
                class="remove-topic"
                aria-label="remove topic"
                on:click=move |_| rows.update(|r| r.remove(row_id))
            >
                "-"
            </button>
        </div>
    }
}

/// Topic rows plus the "+" button
#[component]
pub fn TopicEditor(rows: RwSignal<TopicRows>) -> impl IntoView {
    let focus_row = RwSignal::new(None::<u32>);

    view! {
        <div class="topic-editor">
            <div id="topics-container">
                <For
                    each=move || rows.get().rows().to_vec()
                    key=|row| row.id
                    children=move |row| view! {
                        <TopicRowInput row_id=row.id initial=row.text rows=rows focus_row=focus_row />
                    }
                />
            </div>
            <button
                id="add-topic"
                type="button"
                aria-label="add topic"
                on:click=move |_| rows.update(|r| {
                    r.push();
                })
            >
                "+"
            </button>
        </div>
    }
}
