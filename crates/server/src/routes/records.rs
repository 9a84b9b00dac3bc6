use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::Json;
use docsim::{AnalysisRecord, IndexStats};
use std::sync::Arc;

/// Fetch the stored record for a fingerprint.
pub async fn get_record(
    State(state): State<Arc<ServerState>>,
    Path(fingerprint): Path<String>,
) -> ServerResult<Json<AnalysisRecord>> {
    let record = state.pipeline.record(&fingerprint)?;
    Ok(Json(AnalysisRecord::clone(&record)))
}

/// Aggregate index statistics.
pub async fn index_stats(State(state): State<Arc<ServerState>>) -> Json<IndexStats> {
    Json(state.pipeline.index().stats())
}
