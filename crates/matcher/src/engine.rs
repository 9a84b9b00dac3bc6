use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use index::AnalysisIndex;

use crate::similarity::similarity;
use crate::types::{MatchConfig, MatchError, MatchHit};


/// Compares an indexed document against every other indexed document.
///
/// Holds a shared handle to the index plus the default reporting policy.
/// Comparison never mutates the index.
#[derive(Debug, Clone)]
pub struct Matcher {
    index: Arc<AnalysisIndex>,
    config: MatchConfig,
}

impl Matcher {
    /// Construct a matcher from a shared index handle and a reporting policy.
    pub fn new(index: Arc<AnalysisIndex>, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { index, config })
    }

    /// Matcher with the default exact-duplicate policy.
    pub fn with_index_arc(index: Arc<AnalysisIndex>) -> Self {
        Self {
            index,
            config: MatchConfig::default(),
        }
    }

    pub fn index(&self) -> &Arc<AnalysisIndex> {
        &self.index
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score `fingerprint` against every other record using the matcher's
    /// own policy. Returns `other fingerprint -> score`.
    pub fn find_matches(&self, fingerprint: &str) -> Result<BTreeMap<String, f64>, MatchError> {
        self.find_matches_with(fingerprint, &self.config)
    }

    /// Same as [`Matcher::find_matches`] with an explicit per-request policy.
    pub fn find_matches_with(
        &self,
        fingerprint: &str,
        config: &MatchConfig,
    ) -> Result<BTreeMap<String, f64>, MatchError> {
        Ok(self
            .rank(fingerprint, config)?
            .into_iter()
            .map(|hit| (hit.fingerprint, hit.score))
            .collect())
    }

    /// Scored hits ordered by descending score, ties broken by fingerprint.
    ///
    /// The query record and all candidates are read under a single read
    /// guard, so a concurrent insert lands either before or after the scan.
    pub fn rank(&self, fingerprint: &str, config: &MatchConfig) -> Result<Vec<MatchHit>, MatchError> {
        config.validate()?;
        let start = Instant::now();

        let mut hits = Vec::new();
        let scanned = self.index.scan_except(fingerprint, &mut |query, other_fp, other| {
            let score = similarity(query, other);
            if config.accepts(score) {
                hits.push(MatchHit {
                    fingerprint: other_fp.to_string(),
                    score,
                });
            }
        })?;

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.fingerprint.cmp(&b.fingerprint))
        });
        if let Some(limit) = config.max_results {
            hits.truncate(limit);
        }

        tracing::debug!(
            fingerprint = %fingerprint,
            scanned,
            matches = hits.len(),
            min_score = config.min_score,
            duration_us = start.elapsed().as_micros() as u64,
            "comparison scan finished"
        );
        Ok(hits)
    }
}
