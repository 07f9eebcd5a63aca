//! Batch report assembly.

use kinema_metric::MetricKind;

use crate::clip::ClipName;
use crate::pose::PoseIndex;
use crate::result::MatchResult;

/// Structured result of matching one or more queries against a single clip.
///
/// Pure data shaping for a downstream caller that will log, print, or
/// visualize it; performs no computation of its own.
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// The clip the queries were matched against.
    pub clip: ClipName,
    /// The metric used for every query in this report.
    pub metric: MetricKind,
    /// One result per query, in query order.
    pub matches: Vec<MatchResult>,
}

impl MatchReport {
    /// Assemble a report from a batch of per-query results.
    #[must_use]
    pub fn new(clip: ClipName, metric: MetricKind, matches: Vec<MatchResult>) -> Self {
        Self {
            clip,
            metric,
            matches,
        }
    }

    /// Assemble a report for a single query.
    #[must_use]
    pub fn single(clip: ClipName, metric: MetricKind, result: MatchResult) -> Self {
        Self::new(clip, metric, vec![result])
    }

    /// Return the chosen pose of each query, in query order.
    #[must_use]
    pub fn chosen_poses(&self) -> Vec<PoseIndex> {
        self.matches.iter().map(|m| m.pose).collect()
    }

    /// Return the winning score of each query, in query order.
    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.matches.iter().map(|m| m.score.value()).collect()
    }

    /// Return the number of queries in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Return true if the report covers no queries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
