//! Trajectory types with validation guarantees.
//!
//! A trajectory is an ordered, fixed-length sequence of scalar samples, each
//! corresponding to a fixed time offset relative to "now". Index `i` means
//! the same time offset in every trajectory of a comparison; the metrics do
//! not check offset congruence; callers must ensure it.

use crate::error::MetricError;

/// Owned, validated trajectory. Guaranteed non-empty with all samples finite.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory(Vec<f64>);

impl Trajectory {
    /// Create a new trajectory, validating that it is non-empty and all
    /// samples are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::EmptyTrajectory`] | `samples` is empty |
    /// | [`MetricError::NonFiniteSample`] | Any sample is NaN or infinite |
    pub fn new(samples: Vec<f64>) -> Result<Self, MetricError> {
        validate(&samples)?;
        Ok(Self(samples))
    }

    /// Borrow this trajectory as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> TrajectoryView<'_> {
        TrajectoryView(&self.0)
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the trajectory has no samples. Always `false` for a
    /// trajectory built via [`Trajectory::new`]; provided to satisfy the
    /// `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner sample vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for Trajectory {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Borrowed, validated view into a trajectory. Zero-copy reference.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryView<'a>(&'a [f64]);

impl<'a> TrajectoryView<'a> {
    /// Create a new view, validating the slice like [`Trajectory::new`].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MetricError::EmptyTrajectory`] | `samples` is empty |
    /// | [`MetricError::NonFiniteSample`] | Any sample is NaN or infinite |
    pub fn new(samples: &'a [f64]) -> Result<Self, MetricError> {
        validate(samples)?;
        Ok(Self(samples))
    }

    /// Return the underlying sample slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the view has no samples. Always `false` for a view
    /// built via [`TrajectoryView::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn validate(samples: &[f64]) -> Result<(), MetricError> {
    if samples.is_empty() {
        return Err(MetricError::EmptyTrajectory);
    }
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(MetricError::NonFiniteSample { index });
    }
    Ok(())
}
