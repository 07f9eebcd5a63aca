//! Nearest-pose trajectory matching.
//!
//! Scans a motion clip's candidate trajectories with a chosen metric and
//! selects the pose minimizing the score. Pure computation over validated
//! inputs; loading clips and presenting results live elsewhere.

mod candidates;
mod clip;
mod error;
mod matcher;
mod pose;
mod report;
mod result;

pub use candidates::CandidateSet;
pub use clip::ClipName;
pub use error::MatchError;
pub use matcher::{find_best_match, match_batch};
pub use pose::PoseIndex;
pub use report::MatchReport;
pub use result::MatchResult;
