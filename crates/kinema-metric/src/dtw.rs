//! Dynamic Time Warping distance.

use std::mem;

use tracing::instrument;

use crate::sample::point_distance;
use crate::score::Score;
use crate::trajectory::TrajectoryView;

/// Dynamic Time Warping distance between two trajectories.
///
/// Standard DTW recurrence: each cell pays the pointwise sample distance plus
/// the cheapest of its left, upper, and diagonal predecessors, with an
/// infinite-cost boundary and a zero-cost origin. The result is the
/// accumulated cost at the final cell.
///
/// Lengths need not match; the warping path absorbs the difference. Runs in
/// O(n * m) time with a rolling two-row buffer, O(m) space; views are
/// non-empty by construction, so the computation is total.
#[must_use]
#[instrument(skip(a, b))]
pub fn dynamic_time_warp(a: TrajectoryView<'_>, b: TrajectoryView<'_>) -> Score {
    let (a, b) = (a.as_slice(), b.as_slice());
    let m = b.len();

    // Row buffers are index-shifted by one: slot 0 is the infinite-cost
    // boundary column. `prev` starts as the virtual row above the table,
    // whose only finite entry is the origin.
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for &x in a {
        curr[0] = f64::INFINITY;
        for (j, &y) in b.iter().enumerate() {
            let cost = point_distance(x, y);
            // prev[j] = diagonal, prev[j + 1] = above, curr[j] = left
            curr[j + 1] = cost + prev[j].min(prev[j + 1]).min(curr[j]);
        }
        mem::swap(&mut prev, &mut curr);
    }

    // After the final swap, `prev` holds the last completed row.
    Score::new(prev[m])
}
