//! I/O error types for kinema-io.

use std::path::PathBuf;

/// Errors from file I/O, JSON parsing, and report serialization.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the JSON parser rejects the document or its shape.
    #[error("JSON parse error in {path}")]
    JsonParse {
        /// Path to the JSON file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Returned when a clip document contains zero poses.
    #[error("clip {path} contains no poses")]
    EmptyClip {
        /// Path to the clip file.
        path: PathBuf,
    },

    /// Returned when a pose or query has zero trajectory points.
    #[error("entry {index} in {path} has no trajectory points")]
    EmptyTrajectory {
        /// Path to the JSON file.
        path: PathBuf,
        /// Zero-based pose or query index.
        index: usize,
    },

    /// Returned when poses within one clip have differing sample counts.
    #[error("pose {index} in {path} has {got} trajectory points, expected {expected}")]
    InconsistentTrajectoryLength {
        /// Path to the clip file.
        path: PathBuf,
        /// Zero-based pose index.
        index: usize,
        /// Sample count of the first pose.
        expected: usize,
        /// Sample count of the offending pose.
        got: usize,
    },

    /// Returned when a sample is NaN or infinite after parsing.
    #[error("non-finite sample in {path}: entry {index}, point {point_index}, value {value}")]
    NonFiniteValue {
        /// Path to the JSON file.
        path: PathBuf,
        /// Zero-based pose or query index.
        index: usize,
        /// Zero-based point index within the entry.
        point_index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the declared pose count exceeds the poses present.
    #[error("{path} declares pose count {pose_count} but stores {stored} poses")]
    PoseCountOutOfRange {
        /// Path to the clip file.
        path: PathBuf,
        /// The declared pose count.
        pose_count: usize,
        /// The number of poses in the document.
        stored: usize,
    },

    /// Returned when the clip file's stem is unusable as a clip name.
    #[error("cannot derive a clip name from {path}: stem must match [a-zA-Z0-9_-]+")]
    InvalidClipStem {
        /// Path to the clip file.
        path: PathBuf,
    },

    /// Returned when a query document contains zero queries.
    #[error("query set {path} contains no queries")]
    EmptyQuerySet {
        /// Path to the query file.
        path: PathBuf,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a report file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
