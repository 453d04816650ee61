//! List View Context
//!
//! Store plus the load/select/delete entry points, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::config::Config;
use crate::dialog;
use crate::models::{Note, NoteId};
use crate::store::{
    store_apply_categories, store_apply_notes, store_begin_categories_load,
    store_begin_notes_load, store_set_active_category, ListStore,
};

/// Handle shared by the list view components
#[derive(Clone, Copy)]
pub struct ListContext {
    pub store: ListStore,
    /// Note whose kebab menu is open, if any
    pub open_menu: RwSignal<Option<NoteId>>,
    config: StoredValue<Config>,
}

impl ListContext {
    pub fn new(store: ListStore, config: Config) -> Self {
        Self {
            store,
            open_menu: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    /// Fetch all notes into the cache
    pub async fn fetch_notes(self) {
        let token = store_begin_notes_load(&self.store);
        let config = self.config.get_value();
        match api::list_notes(&config).await {
            Ok(notes) => {
                let count = notes.len();
                if store_apply_notes(&self.store, token, notes) {
                    log::info!("loaded {} notes", count);
                } else {
                    log::debug!("dropped stale notes response #{}", token);
                }
            }
            Err(err) => log::error!("loading notes failed: {}", err),
        }
    }

    /// Fetch the category list
    pub async fn fetch_categories(self) {
        let token = store_begin_categories_load(&self.store);
        let config = self.config.get_value();
        match api::list_categories(&config).await {
            Ok(categories) => {
                if !store_apply_categories(&self.store, token, categories) {
                    log::debug!("dropped stale categories response #{}", token);
                }
            }
            Err(err) => log::error!("loading categories failed: {}", err),
        }
    }

    /// Start both loads without waiting on either
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(ctx.fetch_notes());
        spawn_local(ctx.fetch_categories());
    }

    /// Change the filter (None = All) and refresh from the backend
    pub fn select_category(&self, name: Option<String>) {
        log::debug!("category filter -> {:?}", name);
        store_set_active_category(&self.store, name);
        self.reload();
    }

    /// Confirm, delete, then reload notes and categories in sequence
    pub fn delete_note(&self, note: &Note) {
        if !dialog::confirm(&format!("Delete note \"{}\"?", note.title)) {
            return;
        }
        let ctx = *self;
        let id = note.id.clone();
        spawn_local(async move {
            let config = ctx.config.get_value();
            match api::delete_note(&config, &id).await {
                Ok(()) => {
                    log::info!("deleted note {}", id);
                    ctx.fetch_notes().await;
                    ctx.fetch_categories().await;
                }
                Err(err) => dialog::alert(&delete_error_message(&err)),
            }
        });
    }
}

/// Alert text for a failed delete: backend refusals vs. requests that never completed
pub fn delete_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => format!("Delete failed: {}", err),
        _ => format!("Delete error: {}", err),
    }
}

/// Get the list context
pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_message_uses_backend_error() {
        let err = ApiError::Status { status: 404, message: "Note not found".to_string() };
        assert_eq!(delete_error_message(&err), "Delete failed: Note not found");
    }

    #[test]
    fn test_delete_message_falls_back_to_status_text() {
        let err = ApiError::from_status(500, None);
        assert_eq!(delete_error_message(&err), "Delete failed: Internal Server Error");
    }

    #[test]
    fn test_delete_message_for_transport_error() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(delete_error_message(&err), "Delete error: connection refused");
    }
}
