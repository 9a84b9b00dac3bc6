use index::IndexError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest possible similarity score.
pub const MAX_SCORE: f64 = 100.0;

/// Reporting policy for a comparison scan.
///
/// The default reports exact duplicates only (`min_score == 100.0`) with no
/// cap on the number of hits. Lower `min_score` to surface graded
/// similarity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Inclusive lower bound in `[0, 100]` for a hit to be reported.
    #[serde(default = "MatchConfig::default_min_score")]
    pub min_score: f64,
    /// Keep only the best `max_results` hits. `None` reports all.
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl MatchConfig {
    pub(crate) fn default_min_score() -> f64 {
        MAX_SCORE
    }

    /// Report every other document regardless of score.
    pub fn all_scores() -> Self {
        Self {
            min_score: 0.0,
            max_results: None,
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.min_score.is_finite() || !(0.0..=MAX_SCORE).contains(&self.min_score) {
            return Err(MatchError::InvalidConfig(format!(
                "min_score must be between 0 and 100, got {}",
                self.min_score
            )));
        }
        if self.max_results == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn accepts(&self, score: f64) -> bool {
        score >= self.min_score
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: Self::default_min_score(),
            max_results: None,
        }
    }
}

/// A single scored document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchHit {
    pub fingerprint: String,
    pub score: f64,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// The query fingerprint has never been analyzed.
    #[error("fingerprint not found: {0}")]
    NotFound(String),
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}

impl From<IndexError> for MatchError {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::NotFound(fp) => MatchError::NotFound(fp),
        }
    }
}
