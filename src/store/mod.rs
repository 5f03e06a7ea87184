//! Record store port: the read operations the summary core needs, plus the
//! record types that flow through them.
//!
//! Implementations:
//! - `crate::db::DbActorHandle`: SQLite behind the database actor
//! - `memory::MemoryStore`: in-process store for tests and local runs

pub mod memory;
pub mod records;
pub mod timestamp;

pub use memory::MemoryStore;
pub use records::{Commit, Repository};
pub use timestamp::parse_merged_on;

use crate::error::PytoriError;
use async_trait::async_trait;

/// Read-only access to the `repositories` and `commits` collections.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Looks up one repository by primary key.
    async fn get_repository(&self, id: i64) -> Result<Option<Repository>, PytoriError>;

    /// All commits with `repository_id == repository_id AND is_merged`.
    ///
    /// The order of the returned sequence is the store's native order and is
    /// what breaks ties between commits merged at the same instant.
    async fn query_merged_commits(&self, repository_id: i64)
    -> Result<Vec<Commit>, PytoriError>;

    /// Every repository, in enumeration order.
    async fn list_all_repositories(&self) -> Result<Vec<Repository>, PytoriError>;
}
