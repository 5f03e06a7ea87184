use crate::store::{Commit, Repository};
use chrono::{DateTime, Utc};
use pytori_schema::RepositorySummary;

/// Selects the merged commit with the greatest merge instant.
///
/// Ties keep the commit encountered first, so the store's returned order is
/// the tie-break. Unmerged commits are never candidates.
pub fn latest_merged<'a>(
    commits: impl IntoIterator<Item = &'a Commit>,
) -> Option<(&'a Commit, DateTime<Utc>)> {
    commits
        .into_iter()
        .filter_map(|commit| commit.merged_at().map(|at| (commit, at)))
        .fold(None, |best, (commit, at)| match best {
            Some((_, best_at)) if best_at >= at => best,
            _ => Some((commit, at)),
        })
}

/// Reduces one repository's commits into its summary.
///
/// Commits of other repositories and unmerged commits are ignored even when a
/// store hands them over.
pub fn summarize(repository: &Repository, commits: &[Commit]) -> RepositorySummary {
    let merged: Vec<&Commit> = commits
        .iter()
        .filter(|c| c.repository_id == repository.id && c.merged_at().is_some())
        .collect();

    let mut summary =
        RepositorySummary::empty(repository.id, repository.name.clone(), repository.status);
    summary.shiritori_count = merged.len() as u64;

    if let Some((latest, at)) = latest_merged(merged.iter().copied()) {
        summary.current_word = Some(latest.current_word.clone());
        summary.review_comment = Some(latest.review_comment.clone());
        summary.merged_on = Some(at);
    }
    summary
}
