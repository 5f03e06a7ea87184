use crate::error::PytoriError;
use crate::store::{Commit, Repository, parse_merged_on};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbRepository {
    pub id: i64,
    pub name: String,
    pub status: i64,
}

impl From<DbRepository> for Repository {
    fn from(row: DbRepository) -> Self {
        Repository {
            id: row.id,
            name: row.name,
            status: row.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbCommit {
    pub id: i64,
    pub repository_id: i64,
    pub current_word: String,
    pub review_comment: String,
    pub theme: String,
    pub is_merged: bool,
    /// Raw text as written by the merge workflow; parsed on read.
    pub merged_on: Option<String>,
}

impl TryFrom<DbCommit> for Commit {
    type Error = PytoriError;

    fn try_from(row: DbCommit) -> Result<Self, Self::Error> {
        let merged_on = match (row.is_merged, row.merged_on.as_deref()) {
            (true, Some(raw)) => Some(parse_merged_on(raw)?),
            (true, None) => {
                return Err(PytoriError::InvalidRecord(format!(
                    "commit {} is merged but has no merged_on",
                    row.id
                )));
            }
            (false, _) => None,
        };

        Ok(Commit {
            id: row.id,
            repository_id: row.repository_id,
            current_word: row.current_word,
            review_comment: row.review_comment,
            theme: row.theme,
            is_merged: row.is_merged,
            merged_on,
        })
    }
}
