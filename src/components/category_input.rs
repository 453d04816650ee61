//! Category Input Component
//!
//! Chip input for the creation form with clickable suggestions.

use leptos::prelude::*;

use crate::color::{pick_color_for, CHIP_PALETTE};
use crate::form::{fuzzy_match, CategoryTags};
use crate::models::Category;

/// Suggestions narrowed by the typed text (all of them when nothing is typed)
pub fn matching_suggestions(all: &[Category], typed: &str) -> Vec<String> {
    let query = typed.trim();
    all.iter()
        .filter(|c| fuzzy_match(query, &c.name))
        .map(|c| c.name.clone())
        .collect()
}

/// Chip list, text input and suggestion buttons
///
/// Props:
/// - tags: chips added so far
/// - typed: raw text of the input, also used as the single-category fallback on save
/// - suggestions: categories known to the backend
#[component]
pub fn CategoryInput(
    tags: RwSignal<CategoryTags>,
    typed: RwSignal<String>,
    suggestions: ReadSignal<Vec<Category>>,
) -> impl IntoView {
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let value = typed.get_untracked();
        if !value.trim().is_empty() {
            tags.update(|t| {
                t.add(&value);
            });
            typed.set(String::new());
        }
    };

    view! {
        <div class="category-input">
            <div id="category-tags" class="category-tags">
                <For
                    each=move || tags.get().labels().to_vec()
                    key=|label| label.clone()
                    children=move |label| {
                        let color = pick_color_for(CHIP_PALETTE, &label);
                        let to_remove = label.clone();
                        view! {
                            <div class="chip" style=format!("background: {};", color)>
                                <span class="chip-label">{label}</span>
                                <button
                                    type="button"
                                    class="chip-remove"
                                    aria-label="remove category"
                                    on:click=move |_| tags.update(|t| t.remove(&to_remove))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <input
                id="note-category"
                type="text"
                placeholder="Category (Enter to add)"
                autocomplete="off"
                prop:value=move || typed.get()
                on:input=move |ev| typed.set(event_target_value(&ev))
                on:keydown=on_keydown
            />

            <div class="category-suggestions">
                {move || {
                    let typed_now = typed.get();
                    suggestions.with(|all| matching_suggestions(all, &typed_now))
                        .into_iter()
                        .map(|name| {
                            let name_for_click = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class="suggestion"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        tags.update(|t| {
                                            t.add(&name_for_click);
                                        });
                                    }
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(names: &[&str]) -> Vec<Category> {
        names.iter().map(|n| Category { name: n.to_string(), count: 1 }).collect()
    }

    #[test]
    fn test_empty_input_shows_all_suggestions() {
        let all = cats(&["Work", "Home", "Errands"]);
        assert_eq!(matching_suggestions(&all, ""), vec!["Work", "Home", "Errands"]);
        assert_eq!(matching_suggestions(&all, "   "), vec!["Work", "Home", "Errands"]);
    }

    #[test]
    fn test_typed_text_narrows_suggestions() {
        let all = cats(&["Work", "Home", "Homework"]);
        assert_eq!(matching_suggestions(&all, "hm"), vec!["Home", "Homework"]);
        assert_eq!(matching_suggestions(&all, "wrk"), vec!["Work", "Homework"]);
        assert!(matching_suggestions(&all, "zzz").is_empty());
    }
}
