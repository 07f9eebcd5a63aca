//! Linear-scan nearest-pose matching.

use rayon::prelude::*;
use tracing::{debug, instrument};

use kinema_metric::{MetricKind, Trajectory, TrajectoryView};

use crate::candidates::CandidateSet;
use crate::error::MatchError;
use crate::pose::PoseIndex;
use crate::result::MatchResult;

/// Find the candidate pose minimizing the metric score for one query.
///
/// Exhaustive linear scan over the usable poses. The running best starts at
/// the first candidate's actual score, and only a strictly smaller score
/// displaces it, so ties keep the earliest pose.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MatchError::EmptyCandidateSet`] | The set's pose count is zero |
/// | [`MatchError::Metric`] | Query and candidate shapes are incompatible under `metric` |
#[instrument(skip(query, candidates),
             fields(clip = %candidates.name(), n_poses = candidates.pose_count()))]
pub fn find_best_match(
    query: TrajectoryView<'_>,
    candidates: &CandidateSet,
    metric: MetricKind,
) -> Result<MatchResult, MatchError> {
    let poses = candidates.poses();
    let Some(first) = poses.first() else {
        return Err(MatchError::EmptyCandidateSet {
            clip: candidates.name().as_str().to_string(),
        });
    };

    let mut best_index = 0usize;
    let mut best_score = metric.distance(query, first.as_view())?;

    for (index, candidate) in poses.iter().enumerate().skip(1) {
        let score = metric.distance(query, candidate.as_view())?;
        if score.value() < best_score.value() {
            best_score = score;
            best_index = index;
        }
    }

    debug!(pose = best_index, score = best_score.value(), "best match found");

    Ok(MatchResult {
        pose: PoseIndex::new(best_index),
        trajectory: poses[best_index].clone(),
        score: best_score,
    })
}

/// Match a batch of queries against the same candidate set.
///
/// One result per query, ordered like the input. Queries are independent and
/// the candidate set is read-only, so the batch is parallelized with rayon;
/// the first error aborts the batch.
///
/// # Errors
///
/// Same conditions as [`find_best_match`], surfaced for whichever query
/// fails first.
#[instrument(skip(queries, candidates),
             fields(clip = %candidates.name(), n_queries = queries.len()))]
pub fn match_batch(
    queries: &[Trajectory],
    candidates: &CandidateSet,
    metric: MetricKind,
) -> Result<Vec<MatchResult>, MatchError> {
    let results = queries
        .par_iter()
        .map(|query| find_best_match(query.as_view(), candidates, metric))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(n_matched = results.len(), "batch matched");
    Ok(results)
}
