//! # Docsim Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers "how similar is document X to every previously seen
//! document". It reads [`index::AnalysisIndex`] and never writes to it.
//!
//! ## Scoring
//!
//! [`similarity`] is a weighted Dice coefficient over the word-occurrence
//! multisets of two records, scaled to `[0, 100]`. It is symmetric, `0` for
//! disjoint vocabularies or word-less documents, and exactly `100` only for
//! equal multisets.
//!
//! ## Reporting policy
//!
//! [`MatchConfig`] decides which scores are reported. The default keeps exact
//! duplicates only (`min_score = 100`); lower it for graded similarity and set
//! `max_results` to keep the best hits.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use analysis::AnalysisRecord;
//! use index::AnalysisIndex;
//! use matcher::{MatchConfig, Matcher};
//!
//! let index = Arc::new(AnalysisIndex::new());
//! let a = AnalysisRecord::from_text("The quick fox");
//! let b = AnalysisRecord::from_text("the quick fox.");
//! index.put(a.clone());
//! index.put(b.clone());
//!
//! let matcher = Matcher::new(index, MatchConfig::default()).unwrap();
//! let matches = matcher.find_matches(&a.fingerprint).unwrap();
//! assert_eq!(matches[&b.fingerprint], 100.0);
//! ```

pub mod engine;
pub mod similarity;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::similarity::{common_occurrences, similarity};
pub use crate::types::{MatchConfig, MatchError, MatchHit, MAX_SCORE};
