use crate::error::PytoriError;
use crate::server::router::PytoriState;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    /// Kept as text so a non-integer value is reported as our own 400.
    pub repository_id: Option<String>,
}

/// Interprets the `repository_id` query value.
///
/// Absent or empty selects every repository; anything else must parse as an
/// integer.
pub fn parse_repository_id(raw: Option<&str>) -> Result<Option<i64>, PytoriError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| PytoriError::InvalidRepositoryId(raw.to_string())),
    }
}

/// GET /repo-summary[?repository_id=<id>]
///
/// With an id: one summary object, or 404 when the repository is unknown.
/// Without: an array of summaries in repository listing order.
pub(super) async fn repo_summary_handler(
    State(state): State<PytoriState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Response, PytoriError> {
    // Malformed query strings (e.g. a repeated `repository_id`) get the same JSON 400.
    let Query(query) =
        query.map_err(|rejection| PytoriError::InvalidRepositoryId(rejection.body_text()))?;

    match parse_repository_id(query.repository_id.as_deref())? {
        Some(repository_id) => {
            let summary = state.aggregator.get_summary(repository_id).await?;
            with_pretty_json_debug(&summary, |json| {
                debug!(repository_id, "Repository summary:\n{json}");
            });
            Ok(Json(summary).into_response())
        }
        None => {
            let summaries = state.aggregator.get_all_summaries().await?;
            debug!(count = summaries.len(), "All repository summaries built");
            with_pretty_json_debug(&summaries, |json| {
                debug!("Repository summaries:\n{json}");
            });
            Ok(Json(summaries).into_response())
        }
    }
}
