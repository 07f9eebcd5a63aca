//! Metric selection.

use std::fmt;

use crate::dtw::dynamic_time_warp;
use crate::error::MetricError;
use crate::euclidean::{euclidean_sum, euclidean_variance_normalized};
use crate::score::Score;
use crate::trajectory::TrajectoryView;

/// Selects which distance function the matcher applies. Thread-safe and
/// copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Sum of pointwise sample distances.
    EuclideanSum,
    /// Root mean squared deviation of the pointwise gaps from their mean.
    EuclideanVarianceNormalized,
    /// Dynamic Time Warping.
    DynamicTimeWarping,
}

impl MetricKind {
    /// Compute the distance between two trajectories under this metric.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::LengthMismatch`] | A Euclidean metric over trajectories of different lengths |
    pub fn distance(
        self,
        a: TrajectoryView<'_>,
        b: TrajectoryView<'_>,
    ) -> Result<Score, MetricError> {
        match self {
            Self::EuclideanSum => euclidean_sum(a, b),
            Self::EuclideanVarianceNormalized => euclidean_variance_normalized(a, b),
            Self::DynamicTimeWarping => Ok(dynamic_time_warp(a, b)),
        }
    }

    /// Short name used in CLI arguments and report artifacts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EuclideanSum => "euclid",
            Self::EuclideanVarianceNormalized => "euclid-plus",
            Self::DynamicTimeWarping => "dtw",
        }
    }

    /// Parse a short metric name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "euclid" => Some(Self::EuclideanSum),
            "euclid-plus" => Some(Self::EuclideanVarianceNormalized),
            "dtw" => Some(Self::DynamicTimeWarping),
            _ => None,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::Trajectory;

    #[test]
    fn dispatch_matches_direct_calls() {
        let a = Trajectory::new(vec![0.0, 1.0, 4.0]).unwrap();
        let b = Trajectory::new(vec![1.0, 3.0, 2.0]).unwrap();

        let direct = euclidean_sum(a.as_view(), b.as_view()).unwrap();
        let dispatched = MetricKind::EuclideanSum
            .distance(a.as_view(), b.as_view())
            .unwrap();
        assert_eq!(direct.value(), dispatched.value());

        let direct = dynamic_time_warp(a.as_view(), b.as_view());
        let dispatched = MetricKind::DynamicTimeWarping
            .distance(a.as_view(), b.as_view())
            .unwrap();
        assert_eq!(direct.value(), dispatched.value());
    }

    #[test]
    fn name_round_trip() {
        for kind in [
            MetricKind::EuclideanSum,
            MetricKind::EuclideanVarianceNormalized,
            MetricKind::DynamicTimeWarping,
        ] {
            assert_eq!(MetricKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(MetricKind::from_name("manhattan"), None);
        assert_eq!(MetricKind::from_name(""), None);
    }

    #[test]
    fn display_uses_short_name() {
        assert_eq!(
            format!("{}", MetricKind::EuclideanVarianceNormalized),
            "euclid-plus"
        );
    }
}
