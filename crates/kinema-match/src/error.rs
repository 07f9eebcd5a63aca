//! Error types for candidate-set construction and matching.

use kinema_metric::MetricError;

/// Errors from candidate-set construction and nearest-pose matching.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Returned when a clip name is empty or contains characters outside
    /// `[a-zA-Z0-9_-]`.
    #[error("invalid clip name \"{name}\": must match [a-zA-Z0-9_-]+")]
    InvalidClipName {
        /// The invalid name.
        name: String,
    },

    /// Returned when a candidate set's pose count exceeds the number of
    /// stored trajectories.
    #[error("pose count {pose_count} exceeds the {stored} stored trajectories of clip \"{clip}\"")]
    PoseCountOutOfRange {
        /// The clip whose pose count is invalid.
        clip: String,
        /// The declared pose count.
        pose_count: usize,
        /// The number of trajectories actually stored.
        stored: usize,
    },

    /// Returned when matching against a candidate set with zero usable poses.
    #[error("candidate set \"{clip}\" has no usable poses")]
    EmptyCandidateSet {
        /// The clip that has no usable poses.
        clip: String,
    },

    /// Wraps a metric error encountered while scoring a candidate.
    #[error("metric evaluation failed: {0}")]
    Metric(#[from] MetricError),
}
