//! Category Sidebar Component
//!
//! Left sidebar of categories with counts, plus the mobile dropdown.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::store::store_sidebar_entries;

/// Label of the dropdown option that clears the filter
const ALL_OPTION_LABEL: &str = "All Categories";

/// Category sidebar
#[component]
pub fn CategorySidebar() -> impl IntoView {
    let ctx = use_list_context();

    view! {
        <aside class="category-sidebar">
            <div class="category-sidebar-header">"Categories"</div>
            <ul id="categories">
                {move || store_sidebar_entries(&ctx.store).into_iter().map(|entry| {
                    let key = entry.key;
                    view! {
                        <li
                            class=if entry.active { "active" } else { "" }
                            on:click=move |_| ctx.select_category(key.clone())
                        >
                            {entry.label}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </aside>
    }
}

/// Compact `<select>` shown instead of the sidebar on narrow screens
#[component]
pub fn MobileCategorySelect() -> impl IntoView {
    let ctx = use_list_context();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        ctx.select_category(if value.is_empty() { None } else { Some(value) });
    };

    view! {
        <select
            id="mobile-category-select"
            class="mobile-category-select"
            aria-label="Filter by category"
            on:change=on_change
        >
            {move || store_sidebar_entries(&ctx.store).into_iter().map(|entry| {
                let (value, label) = match entry.key {
                    Some(name) => (name, entry.label),
                    None => (String::new(), ALL_OPTION_LABEL.to_string()),
                };
                view! { <option value=value selected=entry.active>{label}</option> }
            }).collect_view()}
        </select>
    }
}
