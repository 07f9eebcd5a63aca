//! Candidate sets: one motion clip's sampled sub-trajectories.

use kinema_metric::Trajectory;

use crate::clip::ClipName;
use crate::error::MatchError;

/// A named, ordered collection of candidate trajectories for one motion clip,
/// one trajectory per animation pose.
///
/// The pose count bounds how many stored trajectories are usable: entries
/// beyond it are retained but never scanned. Built once from clip data and
/// read-only for the lifetime of a matching query.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    name: ClipName,
    trajectories: Vec<Trajectory>,
    pose_count: usize,
}

impl CandidateSet {
    /// Create a new candidate set.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::PoseCountOutOfRange`] if `pose_count` exceeds
    /// the number of trajectories provided.
    pub fn new(
        name: ClipName,
        trajectories: Vec<Trajectory>,
        pose_count: usize,
    ) -> Result<Self, MatchError> {
        if pose_count > trajectories.len() {
            return Err(MatchError::PoseCountOutOfRange {
                clip: name.as_str().to_string(),
                pose_count,
                stored: trajectories.len(),
            });
        }
        Ok(Self {
            name,
            trajectories,
            pose_count,
        })
    }

    /// Return the clip name.
    #[must_use]
    pub fn name(&self) -> &ClipName {
        &self.name
    }

    /// Return the number of usable poses.
    #[must_use]
    pub fn pose_count(&self) -> usize {
        self.pose_count
    }

    /// Return the usable poses: the first `pose_count` stored trajectories.
    #[must_use]
    pub fn poses(&self) -> &[Trajectory] {
        &self.trajectories[..self.pose_count]
    }

    /// Return every stored trajectory, including entries beyond the pose count.
    #[must_use]
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }
}
