use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view of one repository and its merged shiritori history.
///
/// `current_word`, `review_comment` and `merged_on` are either all `None`
/// (no merged commits, `shiritori_count == 0`) or all taken from the same
/// latest merged commit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub repository_id: i64,
    pub repository_name: String,
    pub status: i64,
    pub shiritori_count: u64,
    pub current_word: Option<String>,
    pub review_comment: Option<String>,
    pub merged_on: Option<DateTime<Utc>>,
}

impl RepositorySummary {
    /// Summary for a repository that has no merged commits yet.
    pub fn empty(repository_id: i64, repository_name: impl Into<String>, status: i64) -> Self {
        Self {
            repository_id,
            repository_name: repository_name.into(),
            status,
            shiritori_count: 0,
            current_word: None,
            review_comment: None,
            merged_on: None,
        }
    }

    pub fn has_history(&self) -> bool {
        self.shiritori_count > 0
    }
}
