use axum::{
    extract::{State, Query},
    response::Json,
    http::StatusCode,
};
use crate::{
    AppState, Orchestrator, RandomMeanQuery, ResponseSet, Result,
    api::handlers::common::parse_count,
    into_batch_set, stats::aggregate,
};
use tracing::{error, info, warn};
use std::sync::Arc;

/// Fan out, join, and aggregate one request's worth of batches.
pub async fn random_mean(
    orchestrator: &Orchestrator,
    requests: usize,
    length: usize,
) -> Result<ResponseSet> {
    let outcomes = orchestrator.fetch_all(requests, length).await;

    let batches = into_batch_set(outcomes).inspect_err(|e| {
        warn!("Fan-out of {} fetches failed: {}", requests, e);
    })?;

    aggregate(&batches).inspect_err(|e| {
        error!("Unable to calculate standard deviation: {}", e);
    })
}

pub async fn get_random_mean(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomMeanQuery>,
) -> std::result::Result<Json<ResponseSet>, StatusCode> {
    let requests = parse_count("requests", params.requests.as_deref())
        .map_err(|e| e.status_code())?;
    let length = parse_count("length", params.length.as_deref())
        .map_err(|e| e.status_code())?;

    info!("Get {} requests of {} numbers", requests, length);

    let response = random_mean(&state.orchestrator, requests, length)
        .await
        .map_err(|e| e.status_code())?;

    Ok(Json(response))
}
