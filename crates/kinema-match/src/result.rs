//! Result type for a single nearest-pose query.

use kinema_metric::{Score, Trajectory};

use crate::pose::PoseIndex;

/// The winning candidate for one query trajectory.
///
/// Holds a snapshot of the winning trajectory's samples rather than a
/// reference, so the result stays valid after the candidate set is dropped.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Index of the chosen pose within the candidate set.
    pub pose: PoseIndex,
    /// Copy of the chosen candidate's samples.
    pub trajectory: Trajectory,
    /// The winning score under the metric used.
    pub score: Score,
}
