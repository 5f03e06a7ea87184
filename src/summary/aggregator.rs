use super::reduce::summarize;
use crate::error::PytoriError;
use crate::store::{RecordStore, Repository};
use futures::{StreamExt, TryStreamExt, stream};
use pytori_schema::RepositorySummary;
use std::sync::Arc;
use tracing::debug;

/// Builds repository summaries from an injected record store.
///
/// Stateless between calls; clones share the same store.
#[derive(Clone)]
pub struct SummaryAggregator {
    store: Arc<dyn RecordStore>,
    max_concurrency: usize,
}

impl SummaryAggregator {
    pub fn new(store: Arc<dyn RecordStore>, max_concurrency: usize) -> Self {
        Self {
            store,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Summary of a single repository.
    ///
    /// Fails with [`PytoriError::RepositoryNotFound`] before any commit query
    /// when the repository does not exist.
    pub async fn get_summary(&self, repository_id: i64) -> Result<RepositorySummary, PytoriError> {
        let repository = self
            .store
            .get_repository(repository_id)
            .await?
            .ok_or(PytoriError::RepositoryNotFound(repository_id))?;

        self.summarize_repository(&repository).await
    }

    /// Summaries of every repository, in the store's enumeration order.
    ///
    /// Up to `max_concurrency` repositories are derived at once. Output order
    /// follows the listing, not completion. Any per-repository failure fails
    /// the whole batch.
    pub async fn get_all_summaries(&self) -> Result<Vec<RepositorySummary>, PytoriError> {
        let repositories = self.store.list_all_repositories().await?;
        debug!(
            repositories = repositories.len(),
            max_concurrency = self.max_concurrency,
            "Summarizing all repositories"
        );

        stream::iter(repositories)
            .map(|repository| async move { self.summarize_repository(&repository).await })
            .buffered(self.max_concurrency)
            .try_collect()
            .await
    }

    async fn summarize_repository(
        &self,
        repository: &Repository,
    ) -> Result<RepositorySummary, PytoriError> {
        let commits = self.store.query_merged_commits(repository.id).await?;
        let summary = summarize(repository, &commits);
        debug!(
            repository_id = summary.repository_id,
            shiritori_count = summary.shiritori_count,
            has_history = summary.has_history(),
            "Repository summarized"
        );
        Ok(summary)
    }
}
