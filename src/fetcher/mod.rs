pub mod random_org;

pub use random_org::*;

use async_trait::async_trait;
use crate::{Batch, Result};

/// Anything that can produce one batch of random integers.
#[async_trait]
pub trait NumberSource: Send + Sync {
    /// Fetch `length` integers for fan-out slot `slot`. Deadlines are applied
    /// by the caller; dropping the returned future must abort the call.
    async fn fetch_batch(&self, slot: usize, length: usize) -> Result<Batch>;
}
