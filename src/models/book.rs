use serde::{Deserialize, Serialize};

/// One public-domain text from the archive. Write-once: a Book is created on
/// first successful fetch, persisted into the cache, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub text: String,
    /// Unix timestamp of the first successful fetch.
    pub fetched_at: i64,
}

impl Book {
    /// Short preview of the text for display, cut on a char boundary.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            return self.text.clone();
        }

        let mut preview = self.text.chars().take(max_chars).collect::<String>();
        preview.push_str("...");
        preview
    }
}
