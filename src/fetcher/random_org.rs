use async_trait::async_trait;
use tracing::{debug, warn};
use crate::{Batch, Error, NumberSource, Result};

pub const RANGE_MIN: i64 = 1;
pub const RANGE_MAX: i64 = 10;

/// Fetches batches from a random.org style `integers` endpoint in plain text.
#[derive(Debug, Clone)]
pub struct RandomOrgFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl RandomOrgFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn query(length: usize) -> [(&'static str, String); 6] {
        [
            ("num", length.to_string()),
            ("min", RANGE_MIN.to_string()),
            ("max", RANGE_MAX.to_string()),
            ("col", "1".to_string()),
            ("base", "10".to_string()),
            ("format", "plain".to_string()),
        ]
    }
}

#[async_trait]
impl NumberSource for RandomOrgFetcher {
    async fn fetch_batch(&self, slot: usize, length: usize) -> Result<Batch> {
        let response = self.client
            .get(&self.base_url)
            .query(&Self::query(length))
            .send()
            .await
            .map_err(|e| {
                warn!("Slot {}: request to {} failed: {}", slot, self.base_url, e);
                Error::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Slot {}: upstream responded with status {}", slot, status.as_u16());
            return Err(Error::Upstream { status: status.as_u16() });
        }

        let body = response.text().await.map_err(|e| {
            warn!("Slot {}: failed to read upstream body: {}", slot, e);
            Error::Transport(e.to_string())
        })?;

        let batch = parse_batch(&body).inspect_err(|e| {
            warn!("Slot {}: {}", slot, e);
        })?;
        debug!("Slot {}: received {} numbers", slot, batch.len());

        Ok(batch)
    }
}

/// Parse a whitespace separated list of base-10 integers. Any bad token
/// rejects the whole body.
pub fn parse_batch(body: &str) -> Result<Batch> {
    body.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| Error::Parse(format!("{:?}: {}", token, e)))
        })
        .collect()
}
