use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::telemetry;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use docsim::{MatchConfig, PipelineError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Per-request overrides of the server's reporting policy.
#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    /// Minimum score (0-100) a document needs to be reported.
    #[serde(default)]
    pub min_score: Option<f64>,

    /// Keep only the best `limit` documents.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl CompareQuery {
    /// Apply the overrides on top of the server's default policy.
    pub fn resolve(&self, base: &MatchConfig) -> MatchConfig {
        let mut cfg = base.clone();
        if let Some(min_score) = self.min_score {
            cfg.min_score = min_score;
        }
        if let Some(limit) = self.limit {
            cfg.max_results = Some(limit);
        }
        cfg
    }
}

/// Compare a stored document against every other stored document.
///
/// Responds with a JSON object mapping each reported fingerprint to its
/// similarity score in `[0, 100]`. With the default policy only exact
/// duplicates (score `100`) are reported:
///
/// ```json
/// { "5e88...": 100.0 }
/// ```
///
/// Unknown fingerprints yield `404 NOT_FOUND`; an out-of-range `min_score`
/// or a zero `limit` yields `400`.
pub async fn compare_document(
    State(state): State<Arc<ServerState>>,
    Path(fingerprint): Path<String>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> ServerResult<Json<BTreeMap<String, f64>>> {
    let Query(query) =
        query.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let cfg = query.resolve(state.pipeline.matcher().config());

    let start = Instant::now();
    let pipeline = state.pipeline.clone();
    let result =
        tokio::task::spawn_blocking(move || pipeline.compare_with(&fingerprint, &cfg)).await?;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(PipelineError::NotFound(_)) => "not_found",
        Err(PipelineError::InvalidConfig(_)) => "invalid",
    };
    telemetry::record_compare(outcome, start.elapsed());

    Ok(Json(result?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_base_policy() {
        let base = MatchConfig::default();
        assert_eq!(CompareQuery::default().resolve(&base), base);
    }

    #[test]
    fn overrides_apply() {
        let query = CompareQuery {
            min_score: Some(40.0),
            limit: Some(3),
        };
        let cfg = query.resolve(&MatchConfig::default());
        assert_eq!(cfg.min_score, 40.0);
        assert_eq!(cfg.max_results, Some(3));
    }
}
