//! Euclidean trajectory metrics.

use tracing::instrument;

use crate::error::MetricError;
use crate::sample::point_distance;
use crate::score::Score;
use crate::trajectory::TrajectoryView;

/// Sum of pointwise sample distances over two trajectories of equal length.
///
/// Symmetric, monotone in every pointwise gap, and zero exactly when the
/// trajectories are identical.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MetricError::LengthMismatch`] | `a` and `b` have different lengths |
#[instrument(skip(a, b))]
pub fn euclidean_sum(a: TrajectoryView<'_>, b: TrajectoryView<'_>) -> Result<Score, MetricError> {
    check_lengths(a, b)?;
    let sum: f64 = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| point_distance(x, y))
        .sum();
    Ok(Score::new(sum))
}

/// Variance-normalized Euclidean distance ("euclid-plus").
///
/// Two passes: first the mean pointwise gap `euclidean_sum(a, b) / n`, then
/// the root mean squared deviation of the pointwise gaps from that mean.
/// Uniform gaps score 0 regardless of their size, so a candidate offset by a
/// constant beats one with a single large excursion and several small ones
/// even when the raw sums are similar. Used as the primary nearest-neighbor
/// cost.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MetricError::LengthMismatch`] | `a` and `b` have different lengths |
#[instrument(skip(a, b))]
pub fn euclidean_variance_normalized(
    a: TrajectoryView<'_>,
    b: TrajectoryView<'_>,
) -> Result<Score, MetricError> {
    let raw = euclidean_sum(a, b)?;
    let n = a.len() as f64;
    let mean = raw.value() / n;

    let variance = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| {
            let dev = point_distance(x, y) - mean;
            dev * dev
        })
        .sum::<f64>()
        / n;

    Ok(Score::new(variance.sqrt()))
}

fn check_lengths(a: TrajectoryView<'_>, b: TrajectoryView<'_>) -> Result<(), MetricError> {
    if a.len() != b.len() {
        return Err(MetricError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
