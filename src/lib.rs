pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod store;
pub mod summary;
pub mod utils;

pub use error::PytoriError;
pub use pytori_schema::{ErrorBody, RepositorySummary};
pub use store::{Commit, MemoryStore, RecordStore, Repository};
pub use summary::SummaryAggregator;
