//! Creation Form Model
//!
//! Plain state behind the new-note form: category chips, topic rows and
//! assembly of the `POST /api/notes` payload.

use thiserror::Error;

use crate::models::{NewNote, Topic, UNCATEGORIZED};

/// Reasons the form refuses to submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please add a title")]
    MissingTitle,
}

/// Ordered, duplicate-free chip labels
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTags {
    labels: Vec<String>,
}

impl CategoryTags {
    /// Add a trimmed chip. Returns false for blank or already present labels.
    ///
    /// Duplicates are detected on the exact label, so `Work` and `work` are
    /// two chips.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.labels.iter().any(|l| l == name) {
            return false;
        }
        self.labels.push(name.to_string());
        true
    }

    pub fn remove(&mut self, label: &str) {
        self.labels.retain(|l| l != label);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// One editable checklist line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow {
    pub id: u32,
    pub text: String,
}

/// Topic inputs in display order. Row ids are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicRows {
    rows: Vec<TopicRow>,
    next_id: u32,
}

impl TopicRows {
    /// Rows with a single empty input
    pub fn with_blank_row() -> Self {
        let mut rows = Self::default();
        rows.push();
        rows
    }

    fn new_row(&mut self) -> TopicRow {
        let id = self.next_id;
        self.next_id += 1;
        TopicRow { id, text: String::new() }
    }

    /// Append an empty row, returning its id
    pub fn push(&mut self) -> u32 {
        let row = self.new_row();
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Insert an empty row right after `id` (or at the end if `id` is gone)
    pub fn insert_after(&mut self, id: u32) -> u32 {
        let row = self.new_row();
        let new_id = row.id;
        match self.rows.iter().position(|r| r.id == id) {
            Some(idx) => self.rows.insert(idx + 1, row),
            None => self.rows.push(row),
        }
        new_id
    }

    pub fn remove(&mut self, id: u32) {
        self.rows.retain(|r| r.id != id);
    }

    pub fn set_text(&mut self, id: u32, text: String) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.text = text;
        }
    }

    pub fn rows(&self) -> &[TopicRow] {
        &self.rows
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.text.as_str())
    }
}

/// Trimmed, non-empty topic texts as open checklist items
pub fn collect_topics<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<Topic> {
    values
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(Topic::open)
        .collect()
}

/// Chips, else the typed category exactly as entered, else `Uncategorized`
pub fn resolve_categories(chips: &[String], typed: &str) -> Vec<String> {
    if !chips.is_empty() {
        return chips.to_vec();
    }
    if typed.is_empty() {
        vec![UNCATEGORIZED.to_string()]
    } else {
        vec![typed.to_string()]
    }
}

/// Validate the form and assemble the creation payload
pub fn build_new_note<'a>(
    title: &str,
    content: &str,
    chips: &CategoryTags,
    typed_category: &str,
    topic_values: impl IntoIterator<Item = &'a str>,
) -> Result<NewNote, FormError> {
    if title.is_empty() {
        return Err(FormError::MissingTitle);
    }
    Ok(NewNote {
        title: title.to_string(),
        content: content.to_string(),
        categories: resolve_categories(chips.labels(), typed_category),
        topics: collect_topics(topic_values),
    })
}

/// Case-insensitive subsequence match: `query` chars appear in order in `target`
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let target = target.to_lowercase();
    let mut target_chars = target.chars();
    query
        .to_lowercase()
        .chars()
        .all(|q| target_chars.any(|c| c == q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chips(labels: &[&str]) -> CategoryTags {
        let mut tags = CategoryTags::default();
        for l in labels {
            tags.add(l);
        }
        tags
    }

    #[test]
    fn test_add_tag_trims_and_dedupes() {
        let mut tags = CategoryTags::default();
        assert!(tags.add("  Work "));
        assert!(!tags.add("Work"));
        assert!(tags.add("work"));
        assert!(!tags.add("   "));
        assert_eq!(tags.labels(), &["Work".to_string(), "work".to_string()]);

        tags.remove("Work");
        assert_eq!(tags.labels(), &["work".to_string()]);
    }

    #[test]
    fn test_categories_from_chips() {
        let note = build_new_note("t", "", &chips(&["Work", "Home"]), "", std::iter::empty()).unwrap();
        assert_eq!(note.categories, vec!["Work", "Home"]);
    }

    #[test]
    fn test_chips_beat_typed_category() {
        let note = build_new_note("t", "", &chips(&["Work"]), "Ignored", std::iter::empty()).unwrap();
        assert_eq!(note.categories, vec!["Work"]);
    }

    #[test]
    fn test_categories_from_typed_input() {
        let note = build_new_note("t", "", &CategoryTags::default(), "Solo", std::iter::empty()).unwrap();
        assert_eq!(note.categories, vec!["Solo"]);
    }

    #[test]
    fn test_typed_category_sent_as_entered() {
        let note = build_new_note("t", "", &CategoryTags::default(), "  Solo ", std::iter::empty()).unwrap();
        assert_eq!(note.categories, vec!["  Solo "]);
    }

    #[test]
    fn test_categories_default_uncategorized() {
        let note = build_new_note("t", "", &CategoryTags::default(), "", std::iter::empty()).unwrap();
        assert_eq!(note.categories, vec!["Uncategorized"]);
    }

    #[test]
    fn test_topics_trimmed_and_blank_dropped() {
        let note = build_new_note("t", "c", &CategoryTags::default(), "", ["Buy milk", "", "  Call Bob  "]).unwrap();
        assert_eq!(note.topics, vec![Topic::open("Buy milk"), Topic::open("Call Bob")]);
        assert!(note.topics.iter().all(|t| !t.done));
        assert_eq!(note.content, "c");
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = build_new_note("", "body", &chips(&["Work"]), "", ["x"]).unwrap_err();
        assert_eq!(err, FormError::MissingTitle);
        assert_eq!(err.to_string(), "Please add a title");
    }

    #[test]
    fn test_whitespace_title_is_submitted() {
        let note = build_new_note("   ", "", &CategoryTags::default(), "", std::iter::empty()).unwrap();
        assert_eq!(note.title, "   ");
    }

    #[test]
    fn test_payload_json_shape() {
        let note = build_new_note("Title", "Body", &chips(&["A"]), "", ["x"]).unwrap();
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            serde_json::json!({
                "title": "Title",
                "content": "Body",
                "categories": ["A"],
                "topics": [{"text": "x", "done": false}]
            })
        );
    }

    #[test]
    fn test_topic_rows_insert_after_and_remove() {
        let mut rows = TopicRows::with_blank_row();
        let first = rows.rows()[0].id;
        let last = rows.push();
        let middle = rows.insert_after(first);
        let order: Vec<u32> = rows.rows().iter().map(|r| r.id).collect();
        assert_eq!(order, vec![first, middle, last]);

        rows.set_text(middle, "Call Bob".to_string());
        rows.remove(first);
        assert_eq!(rows.values().collect::<Vec<_>>(), vec!["Call Bob", ""]);

        // removed ids are not handed out again
        let fresh = rows.insert_after(first);
        assert!(fresh > last && fresh > middle);
        assert_eq!(rows.rows().last().map(|r| r.id), Some(fresh));
    }

    #[test]
    fn test_topic_rows_feed_payload_in_order() {
        let mut rows = TopicRows::default();
        let a = rows.push();
        let c = rows.push();
        let b = rows.insert_after(a);
        rows.set_text(a, "one".into());
        rows.set_text(b, " two ".into());
        rows.set_text(c, "three".into());
        let topics = collect_topics(rows.values());
        let texts: Vec<_> = topics.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("wk", "Work"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("kw", "Work"));
        assert!(!fuzzy_match("works", "Work"));
    }
}
