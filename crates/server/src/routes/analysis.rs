use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::telemetry;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use docsim::AnalysisRecord;
use std::sync::Arc;

/// Analyze a raw document.
///
/// The request body is the document itself, any encoding. The response is
/// the stored [`AnalysisRecord`]:
///
/// ```json
/// {
///   "char_count": 25,
///   "word_count": 4,
///   "para_count": 2,
///   "unique_words": 3,
///   "fingerprint": "9f3c...",
///   "word_frequency": { "hello": 2, "world": 1, "bye": 1 }
/// }
/// ```
///
/// Posting the same bytes again returns an identical record and leaves a
/// single entry in the index. A body that cannot be read is rejected before
/// anything is stored.
pub async fn analyze_document(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Json<AnalysisRecord>> {
    let bytes = body.map_err(|rejection| reject_body(&state, rejection))?;

    let pipeline = state.pipeline.clone();
    let (record, index_records) = tokio::task::spawn_blocking(move || {
        let record = pipeline.analyze(&bytes)?;
        Ok::<_, docsim::PipelineError>((record, pipeline.index().len()))
    })
    .await??;

    telemetry::record_analyzed(index_records);
    Ok(Json(record))
}

fn reject_body(state: &ServerState, rejection: BytesRejection) -> ServerError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(state.config.max_body_size_mb)
    } else {
        ServerError::BadRequest(format!("unreadable request body: {}", rejection.body_text()))
    }
}
