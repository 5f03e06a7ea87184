pub mod error;
pub mod summary;

pub use error::ErrorBody;
pub use summary::RepositorySummary;
