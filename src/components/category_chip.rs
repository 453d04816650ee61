//! Category Chip Component

use leptos::prelude::*;

use crate::color::pick_color_for;

/// Read-only category label colored from `palette`
#[component]
pub fn CategoryChip(
    #[prop(into)] name: String,
    palette: &'static [&'static str],
) -> impl IntoView {
    let color = pick_color_for(palette, &name);
    view! {
        <span class="category-chip" style=format!("background: {};", color)>{name}</span>
    }
}
