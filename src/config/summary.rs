use serde::{Deserialize, Serialize};

/// Settings for the repository summary fan-out.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryConfig {
    /// Upper bound on per-repository derivations in flight during an
    /// all-repositories request.
    /// TOML: `summary.max_concurrency`. Default: `8`. Values below 1 act as 1.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl SummaryConfig {
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_max_concurrency() -> usize {
    8
}
