use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Raw query for `/random/mean`. Values stay strings so malformed input is
/// reported by the handler rather than by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct RandomMeanQuery {
    pub requests: Option<String>,
    pub length: Option<String>,
}
