//! UI Components
//!
//! Reusable Leptos components.

mod category_chip;
mod topic_checklist;
mod note_card;
mod note_list;
mod category_sidebar;
mod list_view;
mod category_input;
mod topic_editor;
mod new_note_form;
mod note_detail;

pub use category_chip::CategoryChip;
pub use topic_checklist::TopicChecklist;
pub use note_card::NoteCard;
pub use note_list::NoteList;
pub use category_sidebar::{CategorySidebar, MobileCategorySelect};
pub use list_view::ListView;
pub use category_input::CategoryInput;
pub use topic_editor::TopicEditor;
pub use new_note_form::NewNoteForm;
pub use note_detail::NoteDetail;
