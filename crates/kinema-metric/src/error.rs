//! Error types for trajectory validation and distance computation.

/// Errors from trajectory validation and distance computation.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    /// Returned when an empty slice is provided as a trajectory.
    #[error("trajectory must be non-empty")]
    EmptyTrajectory,

    /// Returned when a trajectory contains NaN, infinity, or negative infinity.
    #[error("trajectory contains non-finite sample at index {index}")]
    NonFiniteSample {
        /// Position of the first non-finite sample found.
        index: usize,
    },

    /// Returned when a pointwise metric is applied to trajectories of
    /// different lengths.
    #[error("trajectory lengths differ: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first trajectory.
        left: usize,
        /// Length of the second trajectory.
        right: usize,
    },
}
