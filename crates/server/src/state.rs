use crate::config::ServerConfig;
use crate::error::ServerResult;
use docsim::{DocsimConfig, DocumentPipeline};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Analyze / compare pipeline over the shared index
    pub pipeline: DocumentPipeline,

    /// Prometheus render handle, when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state with an empty index.
    ///
    /// The pipeline policy comes from `config.pipeline_config` when set,
    /// otherwise the defaults (exact duplicates only).
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let pipeline_cfg = match &config.pipeline_config {
            Some(path) => DocsimConfig::from_file(path)?,
            None => DocsimConfig::default(),
        };
        let pipeline = DocumentPipeline::from_config(&pipeline_cfg)?;

        tracing::info!(
            min_score = pipeline.matcher().config().min_score,
            max_results = ?pipeline.matcher().config().max_results,
            "pipeline ready"
        );

        Ok(Self::with_pipeline(config, pipeline))
    }

    /// Wrap an existing pipeline, e.g. one shared with other components.
    pub fn with_pipeline(config: ServerConfig, pipeline: DocumentPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub indexed_documents: usize,
}
