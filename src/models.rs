use serde::{Serialize, Deserialize};
use crate::Error;

/// Integers returned by a single upstream fetch.
pub type Batch = Vec<i64>;

/// Batches for one incoming request, in the order the fetches were launched.
pub type BatchSet = Vec<Batch>;

/// Outcome of one fan-out slot. Failures are kept in place so slot `i`
/// always refers to the `i`-th launched fetch.
pub type SlotOutcome = Result<Batch, Error>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatResult {
    pub stddev: f64,
    pub data: Batch,
}

/// One entry per batch followed by a single aggregate entry over all batches.
pub type ResponseSet = Vec<StatResult>;

/// Collapse slot outcomes into a `BatchSet`, failing on the first failed slot
/// in index order.
pub fn into_batch_set(outcomes: Vec<SlotOutcome>) -> Result<BatchSet, Error> {
    outcomes.into_iter().collect()
}
