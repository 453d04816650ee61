//! Frontend Models
//!
//! Data structures matching the notes backend JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category every note falls back to when it carries none
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Opaque note identifier.
///
/// The backend hands out integer timestamps, but nothing here depends on
/// that; the id is only echoed back into URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Int(id) => write!(f, "{}", id),
            NoteId::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for NoteId {
    /// Route segments that look like integers map back to integer ids
    fn from(raw: &str) -> Self {
        raw.parse().map(NoteId::Int).unwrap_or_else(|_| NoteId::Text(raw.to_string()))
    }
}

/// Checklist line inside a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Topic {
    pub fn open(text: impl Into<String>) -> Self {
        Self { text: text.into(), done: false }
    }
}

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    /// Legacy comma-separated category string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub topics: Option<Vec<Topic>>,
}

impl Note {
    /// Categories used for display and filtering.
    ///
    /// `categories` wins when non-empty, then the legacy `category` string,
    /// then `Uncategorized`.
    pub fn effective_categories(&self) -> Vec<String> {
        if let Some(cats) = self.categories.as_ref().filter(|c| !c.is_empty()) {
            return cats.clone();
        }
        let legacy: Vec<String> = self
            .category
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        if legacy.is_empty() {
            vec![UNCATEGORIZED.to_string()]
        } else {
            legacy
        }
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.effective_categories().iter().any(|c| c == name)
    }

    pub fn topics(&self) -> &[Topic] {
        self.topics.as_deref().unwrap_or(&[])
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Text the background color is hashed from: the title, or the id when untitled
    pub fn color_key(&self) -> String {
        if self.title.is_empty() {
            self.id.to_string()
        } else {
            self.title.clone()
        }
    }

    /// Path of the note's detail page
    pub fn detail_path(&self) -> String {
        format!("/notes/{}", self.id)
    }
}

/// Category with server-computed usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// Body of `POST /api/notes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub categories: Vec<String>,
    pub topics: Vec<Topic>,
}

/// Body of `PATCH /api/notes/:id`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,
}
