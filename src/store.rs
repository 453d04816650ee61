//! List View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, Note};

/// Label prefix of the synthetic entry that clears the filter
pub const ALL_LABEL: &str = "All";

/// Monotonic counter used to drop responses of superseded requests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Start a new request and return its token
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// True if no request was started after the one holding `token`
    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

/// List view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// Last fetched notes, in backend order
    pub notes: Vec<Note>,
    /// Last fetched categories with server counts
    pub categories: Vec<Category>,
    /// Category filter (None = All)
    pub active_category: Option<String>,
    pub notes_generation: RequestGeneration,
    pub categories_generation: RequestGeneration,
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// One row of the category sidebar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Category selected by this row (None = All)
    pub key: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Notes whose effective categories contain `active`, or all of them
pub fn filter_notes(notes: &[Note], active: Option<&str>) -> Vec<Note> {
    match active {
        Some(name) => notes.iter().filter(|n| n.has_category(name)).cloned().collect(),
        None => notes.to_vec(),
    }
}

/// `All (<cached notes>)` followed by `<name> (<count>)` per category
pub fn sidebar_entries(cached_notes: usize, categories: &[Category], active: Option<&str>) -> Vec<SidebarEntry> {
    let all = SidebarEntry {
        key: None,
        label: format!("{} ({})", ALL_LABEL, cached_notes),
        active: active.is_none(),
    };
    std::iter::once(all)
        .chain(categories.iter().map(|c| SidebarEntry {
            key: Some(c.name.clone()),
            label: format!("{} ({})", c.name, c.count),
            active: active == Some(c.name.as_str()),
        }))
        .collect()
}

// ========================
// Store Helper Functions
// ========================

/// Notes passing the current filter
pub fn store_visible_notes(store: &ListStore) -> Vec<Note> {
    let active = store.active_category().get();
    store.notes().with(|notes| filter_notes(notes, active.as_deref()))
}

pub fn store_sidebar_entries(store: &ListStore) -> Vec<SidebarEntry> {
    let active = store.active_category().get();
    let cached = store.notes().with(|notes| notes.len());
    store.categories().with(|cats| sidebar_entries(cached, cats, active.as_deref()))
}

pub fn store_begin_notes_load(store: &ListStore) -> u64 {
    store.notes_generation().write().begin()
}

pub fn store_begin_categories_load(store: &ListStore) -> u64 {
    store.categories_generation().write().begin()
}

/// Replace the notes cache unless a newer load was started. Returns whether applied.
pub fn store_apply_notes(store: &ListStore, token: u64, notes: Vec<Note>) -> bool {
    if !store.notes_generation().get_untracked().is_current(token) {
        return false;
    }
    *store.notes().write() = notes;
    true
}

/// Replace the category list unless a newer load was started. Returns whether applied.
pub fn store_apply_categories(store: &ListStore, token: u64, categories: Vec<Category>) -> bool {
    if !store.categories_generation().get_untracked().is_current(token) {
        return false;
    }
    *store.categories().write() = categories;
    true
}

pub fn store_set_active_category(store: &ListStore, name: Option<String>) {
    *store.active_category().write() = name;
}
