//! Note Endpoints

use crate::config::Config;
use crate::models::{NewNote, Note, NoteId, NotePatch};
use super::{check, read_json, ApiError};

fn note_url(config: &Config, id: &NoteId) -> String {
    config.url(&format!("/api/notes/{}", id))
}

/// `GET /api/notes`
pub async fn list_notes(config: &Config) -> Result<Vec<Note>, ApiError> {
    let url = config.url("/api/notes");
    log::debug!("GET {}", url);
    let resp = reqwest::Client::new().get(&url).send().await?;
    read_json(resp).await
}

/// `GET /api/notes/:id`
pub async fn get_note(config: &Config, id: &NoteId) -> Result<Note, ApiError> {
    let url = note_url(config, id);
    log::debug!("GET {}", url);
    let resp = reqwest::Client::new().get(&url).send().await?;
    read_json(resp).await
}

/// `POST /api/notes`. The created note in the response is not needed.
pub async fn create_note(config: &Config, note: &NewNote) -> Result<(), ApiError> {
    let url = config.url("/api/notes");
    log::debug!("POST {} ({} categories, {} topics)", url, note.categories.len(), note.topics.len());
    let resp = reqwest::Client::new().post(&url).json(note).send().await?;
    check(resp).await?;
    Ok(())
}

/// `PATCH /api/notes/:id`
pub async fn update_note(config: &Config, id: &NoteId, patch: &NotePatch) -> Result<Note, ApiError> {
    let url = note_url(config, id);
    log::debug!("PATCH {}", url);
    let resp = reqwest::Client::new().patch(&url).json(patch).send().await?;
    read_json(resp).await
}

/// `DELETE /api/notes/:id`
pub async fn delete_note(config: &Config, id: &NoteId) -> Result<(), ApiError> {
    let url = note_url(config, id);
    log::debug!("DELETE {}", url);
    let resp = reqwest::Client::new().delete(&url).send().await?;
    check(resp).await?;
    Ok(())
}
