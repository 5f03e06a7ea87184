use chrono::{DateTime, Utc};

/// A team taking part in the shiritori game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    /// Game state as stored; the set of values is owned by the write path.
    pub status: i64,
}

impl Repository {
    pub fn new(id: i64, name: impl Into<String>, status: i64) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }
}

/// A proposed or accepted word-chain move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: i64,
    pub repository_id: i64,
    pub current_word: String,
    pub review_comment: String,
    pub theme: String,
    pub is_merged: bool,
    /// Present iff `is_merged`.
    pub merged_on: Option<DateTime<Utc>>,
}

impl Commit {
    /// A commit accepted into the repository history at `merged_on`.
    pub fn merged(
        id: i64,
        repository_id: i64,
        current_word: impl Into<String>,
        review_comment: impl Into<String>,
        merged_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            repository_id,
            current_word: current_word.into(),
            review_comment: review_comment.into(),
            theme: String::new(),
            is_merged: true,
            merged_on: Some(merged_on),
        }
    }

    /// A commit still under review.
    pub fn pending(id: i64, repository_id: i64, current_word: impl Into<String>) -> Self {
        Self {
            id,
            repository_id,
            current_word: current_word.into(),
            review_comment: String::new(),
            theme: String::new(),
            is_merged: false,
            merged_on: None,
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Merge instant, only for commits that are actually merged.
    pub fn merged_at(&self) -> Option<DateTime<Utc>> {
        if self.is_merged { self.merged_on } else { None }
    }
}
