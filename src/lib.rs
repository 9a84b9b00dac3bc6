//! Workspace umbrella crate for Docsim.
//!
//! This crate stitches together analysis, the shared index and the matcher so
//! callers can run the two service operations through one entry point:
//!
//! - **Analyze**: fingerprint and count a document, then store the record.
//! - **Compare**: score a stored document against every other stored one.
//!
//! ```
//! use docsim::{DocumentPipeline, MatchConfig};
//!
//! let pipeline = DocumentPipeline::in_memory(MatchConfig::default()).unwrap();
//! let first = pipeline.analyze(b"The quick fox").unwrap();
//! let second = pipeline.analyze(b"the quick fox!").unwrap();
//!
//! let matches = pipeline.compare(&first.fingerprint).unwrap();
//! assert_eq!(matches[&second.fingerprint], 100.0);
//! ```

pub mod config;

pub use analysis::{
    count_paragraphs, fingerprint, normalize_token, tokenize, AnalysisRecord, TextStats,
};
pub use config::{ConfigLoadError, DocsimConfig};
pub use index::{AnalysisIndex, IndexError, IndexStats};
pub use matcher::{similarity, MatchConfig, MatchError, MatchHit, Matcher, MAX_SCORE};

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Errors that can occur while running a pipeline operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Compare was asked for a fingerprint that was never analyzed.
    NotFound(String),
    /// Reporting policy out of range.
    InvalidConfig(String),
}

impl PipelineError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PipelineError::NotFound(_))
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::NotFound(fp) => write!(f, "document not found: {fp}"),
            PipelineError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for PipelineError {}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        match value {
            MatchError::NotFound(fp) => PipelineError::NotFound(fp),
            MatchError::InvalidConfig(msg) => PipelineError::InvalidConfig(msg),
        }
    }
}

impl From<IndexError> for PipelineError {
    fn from(value: IndexError) -> Self {
        match value {
            IndexError::NotFound(fp) => PipelineError::NotFound(fp),
        }
    }
}

/// Analyze and compare documents against one shared index.
///
/// Cheap to clone; clones share the same index.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    index: Arc<AnalysisIndex>,
    matcher: Matcher,
}

impl DocumentPipeline {
    /// Build a pipeline over an existing index handle.
    pub fn new(index: Arc<AnalysisIndex>, match_cfg: MatchConfig) -> Result<Self, PipelineError> {
        let matcher = Matcher::new(Arc::clone(&index), match_cfg)?;
        Ok(Self { index, matcher })
    }

    /// Fresh, empty in-memory index.
    pub fn in_memory(match_cfg: MatchConfig) -> Result<Self, PipelineError> {
        Self::new(Arc::new(AnalysisIndex::new()), match_cfg)
    }

    pub fn from_config(cfg: &DocsimConfig) -> Result<Self, PipelineError> {
        let index = Arc::new(AnalysisIndex::with_capacity(cfg.index.initial_capacity));
        Self::new(index, cfg.match_config())
    }

    pub fn index(&self) -> &Arc<AnalysisIndex> {
        &self.index
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Analyze raw bytes and store the record under its fingerprint.
    ///
    /// The record is computed in full before the index is touched, so the
    /// index either gains the whole record or nothing. Re-analyzing
    /// identical bytes overwrites with an equal record.
    pub fn analyze(&self, bytes: &[u8]) -> Result<AnalysisRecord, PipelineError> {
        let start = Instant::now();
        let record = AnalysisRecord::from_bytes(bytes);
        let replaced = self.index.put(record.clone()).is_some();

        tracing::info!(
            fingerprint = %record.fingerprint,
            bytes = bytes.len(),
            word_count = record.word_count,
            unique_words = record.unique_word_count,
            replaced,
            duration_us = start.elapsed().as_micros() as u64,
            "document analyzed"
        );
        Ok(record)
    }

    /// Scores against every other stored record, filtered by the pipeline's
    /// default policy.
    pub fn compare(&self, fingerprint: &str) -> Result<BTreeMap<String, f64>, PipelineError> {
        Ok(self.matcher.find_matches(fingerprint)?)
    }

    /// Same as [`DocumentPipeline::compare`] with a per-call policy.
    pub fn compare_with(
        &self,
        fingerprint: &str,
        cfg: &MatchConfig,
    ) -> Result<BTreeMap<String, f64>, PipelineError> {
        Ok(self.matcher.find_matches_with(fingerprint, cfg)?)
    }

    /// Fetch a stored record.
    pub fn record(&self, fingerprint: &str) -> Result<Arc<AnalysisRecord>, PipelineError> {
        Ok(self.index.get(fingerprint)?)
    }
}
