
use crate::{Batch, NumberSource, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

type Script = Box<dyn Fn(usize, usize) -> (Duration, Result<Batch>) + Send + Sync>;

/// Test double whose behaviour per slot is decided by a closure returning a
/// delay and a result.
pub struct ScriptedSource {
    calls: AtomicUsize,
    finished: AtomicUsize,
    script: Script,
}

impl ScriptedSource {
    pub fn new<F>(script: F) -> Self
    where
        F: Fn(usize, usize) -> (Duration, Result<Batch>) + Send + Sync + 'static,
    {
        Self {
            calls: AtomicUsize::new(0),
            finished: AtomicUsize::new(0),
            script: Box::new(script),
        }
    }

    /// Every slot answers immediately with `length` copies of its own index.
    pub fn echo_slot() -> Self {
        Self::new(|slot, length| (Duration::ZERO, Ok(vec![slot as i64; length])))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Fetches that got past their delay and produced a result.
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NumberSource for ScriptedSource {
    async fn fetch_batch(&self, slot: usize, length: usize) -> Result<Batch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, result) = (self.script)(slot, length);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.finished.fetch_add(1, Ordering::SeqCst);
        result
    }
}
