use crate::server::router::PytoriState;
use axum::{Router, routing::get};

pub mod health;
pub mod summary;

pub fn router() -> Router<PytoriState> {
    Router::new()
        .route("/repo-summary", get(summary::repo_summary_handler))
        .route("/health", get(health::health_handler))
}
