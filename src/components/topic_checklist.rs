//! Topic Checklist Component
//!
//! Read-only rendering of a note's checklist.

use leptos::prelude::*;

use crate::models::Topic;

/// `☑︎ text` for done topics, `☐ text` otherwise
pub fn topic_line(topic: &Topic) -> String {
    let marker = if topic.done { "☑︎ " } else { "☐ " };
    format!("{}{}", marker, topic.text)
}

/// Ordered checklist; renders nothing when there are no topics
#[component]
pub fn TopicChecklist(topics: Vec<Topic>) -> impl IntoView {
    (!topics.is_empty()).then(|| view! {
        <ul class="topics">
            {topics.iter().map(|t| view! { <li>{topic_line(t)}</li> }).collect_view()}
        </ul>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_line_markers() {
        assert_eq!(topic_line(&Topic::open("Buy milk")), "☐ Buy milk");
        let done = Topic { text: "Call Bob".into(), done: true };
        assert_eq!(topic_line(&done), "☑︎ Call Bob");
    }
}
