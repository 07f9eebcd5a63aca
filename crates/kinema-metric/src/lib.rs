//! Trajectory distance metrics for motion matching.
//!
//! Pure math library with zero I/O. Provides validated trajectory types, the
//! pointwise sample distance, and three whole-trajectory metrics: plain
//! Euclidean sum, variance-normalized Euclidean ("euclid-plus"), and
//! Dynamic Time Warping.

mod dtw;
mod error;
mod euclidean;
mod kind;
mod sample;
mod score;
mod trajectory;

pub use dtw::dynamic_time_warp;
pub use error::MetricError;
pub use euclidean::{euclidean_sum, euclidean_variance_normalized};
pub use kind::MetricKind;
pub use sample::point_distance;
pub use score::Score;
pub use trajectory::{Trajectory, TrajectoryView};
