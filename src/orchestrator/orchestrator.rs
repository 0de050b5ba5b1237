use crate::{Error, NumberSource, SlotOutcome};
use futures::stream::{FuturesOrdered, StreamExt};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

/// Fans a request out into independent upstream fetches and joins them back
/// in launch order.
#[derive(Clone)]
pub struct Orchestrator {
    source: Arc<dyn NumberSource>,
    fetch_timeout: Duration,
}

impl Orchestrator {
    pub fn new(source: Arc<dyn NumberSource>, fetch_timeout: Duration) -> Self {
        Self { source, fetch_timeout }
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Launch `requests` fetches of `length` integers each and wait for all of
    /// them. Slot `i` of the result always belongs to the `i`-th launched
    /// fetch, whatever order the fetches complete in.
    pub async fn fetch_all(&self, requests: usize, length: usize) -> Vec<SlotOutcome> {
        info!("Launching {} fetches of {} numbers", requests, length);

        let mut tasks = FuturesOrdered::new();
        for slot in 0..requests {
            let source = Arc::clone(&self.source);
            let timeout = self.fetch_timeout;
            let deadline = Instant::now() + timeout;

            let task = tokio::spawn(async move {
                match timeout_at(deadline, source.fetch_batch(slot, length)).await {
                    Ok(result) => result,
                    Err(_) => Err(Error::Timeout(timeout)),
                }
            });

            tasks.push_back(AbortOnDrop(task));
        }

        let mut outcomes = Vec::with_capacity(requests);
        while let Some(joined) = tasks.next().await {
            let slot = outcomes.len();
            let outcome = joined.map_err(Error::from).and_then(|result| result);

            match &outcome {
                Ok(batch) => debug!("Slot {} completed with {} numbers", slot, batch.len()),
                Err(e) => warn!("Slot {} failed: {}", slot, e),
            }
            outcomes.push(outcome);
        }

        outcomes
    }
}

/// Spawned unit that is aborted when its handle is dropped, so abandoning
/// `fetch_all` midway also stops the in-flight upstream calls.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Future for AbortOnDrop<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
