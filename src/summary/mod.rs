//! Repository summaries: the reduction over merged commits and the
//! aggregator that drives it against a record store.

mod aggregator;
mod reduce;

pub use aggregator::SummaryAggregator;
pub use reduce::{latest_merged, summarize};
