use serde::{Deserialize, Serialize};

/// Flat error payload returned by every non-2xx response, e.g.
/// `{"error":"Repository not found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
