use super::{Commit, RecordStore, Repository};
use crate::error::PytoriError;
use async_trait::async_trait;

/// In-process record store. Enumeration order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    repositories: Vec<Repository>,
    commits: Vec<Commit>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repositories.push(repository);
        self
    }

    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.push(commit);
        self
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_repository(&self, id: i64) -> Result<Option<Repository>, PytoriError> {
        Ok(self.repositories.iter().find(|r| r.id == id).cloned())
    }

    async fn query_merged_commits(
        &self,
        repository_id: i64,
    ) -> Result<Vec<Commit>, PytoriError> {
        Ok(self
            .commits
            .iter()
            .filter(|c| c.repository_id == repository_id && c.is_merged)
            .cloned()
            .collect())
    }

    async fn list_all_repositories(&self) -> Result<Vec<Repository>, PytoriError> {
        Ok(self.repositories.clone())
    }
}
