// src/view_models.rs

/// One line of the question table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionRow {
    pub id: String,
    pub type_label: &'static str,
    pub content: String,
    pub difficulty_label: &'static str,
    pub detail: String,
}

impl QuestionRow {
    /// Content shortened to `max_chars`, with an ellipsis when cut.
    pub fn content_preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let cut: String = self.content.chars().take(max_chars).collect();
            format!("{cut}…")
        }
    }
}
