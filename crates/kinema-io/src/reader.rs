//! Motion-clip JSON reader with full input validation.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, instrument};

use kinema_match::{CandidateSet, ClipName};
use kinema_metric::Trajectory;

use crate::IoError;

/// Raw shape of an exported clip document.
///
/// A clip carries a `Trajectory` array with one entry per animation pose,
/// each holding `TrajectoryPoints` sampled at fixed time offsets; only the
/// `Position.X` component participates in matching. `PoseCount` bounds how
/// many entries are valid.
#[derive(Debug, Deserialize)]
struct RawClip {
    #[serde(rename = "PoseCount")]
    pose_count: usize,
    #[serde(rename = "Trajectory")]
    trajectory: Vec<RawPose>,
}

#[derive(Debug, Deserialize)]
struct RawPose {
    #[serde(rename = "TrajectoryPoints")]
    points: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    #[serde(rename = "Position")]
    position: RawPosition,
}

#[derive(Debug, Deserialize)]
struct RawPosition {
    #[serde(rename = "X")]
    x: f64,
}

/// Reads one motion-clip JSON file into a [`CandidateSet`].
///
/// The candidate set is named after the file stem.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::JsonParse`] | Malformed JSON or wrong document shape |
/// | [`IoError::InvalidClipStem`] | File stem unusable as a clip name |
/// | [`IoError::EmptyClip`] | Zero poses in the `Trajectory` array |
/// | [`IoError::EmptyTrajectory`] | A pose with zero trajectory points |
/// | [`IoError::InconsistentTrajectoryLength`] | Poses with differing sample counts |
/// | [`IoError::NonFiniteValue`] | A sample parsed to NaN or infinity |
/// | [`IoError::PoseCountOutOfRange`] | `PoseCount` exceeds the poses present |
pub struct ClipReader {
    path: PathBuf,
}

impl ClipReader {
    /// Create a new reader for the given clip file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the clip file, returning a [`CandidateSet`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<CandidateSet, IoError> {
        // 1. Derive the clip name from the file stem.
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let name = ClipName::new(stem.to_string()).map_err(|_| IoError::InvalidClipStem {
            path: self.path.clone(),
        })?;

        // 2. Open and parse the document.
        let file = File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;
        let raw: RawClip =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| IoError::JsonParse {
                path: self.path.clone(),
                source: e,
            })?;
        debug!(n_poses = raw.trajectory.len(), pose_count = raw.pose_count, "clip parsed");

        if raw.trajectory.is_empty() {
            return Err(IoError::EmptyClip {
                path: self.path.clone(),
            });
        }

        // 3. Validate each pose and extract its X samples.
        let mut trajectories = Vec::with_capacity(raw.trajectory.len());
        let mut expected_len = 0usize;

        for (index, pose) in raw.trajectory.iter().enumerate() {
            if pose.points.is_empty() {
                return Err(IoError::EmptyTrajectory {
                    path: self.path.clone(),
                    index,
                });
            }
            if index == 0 {
                expected_len = pose.points.len();
            } else if pose.points.len() != expected_len {
                return Err(IoError::InconsistentTrajectoryLength {
                    path: self.path.clone(),
                    index,
                    expected: expected_len,
                    got: pose.points.len(),
                });
            }

            let mut samples = Vec::with_capacity(pose.points.len());
            for (point_index, point) in pose.points.iter().enumerate() {
                let value = point.position.x;
                if !value.is_finite() {
                    return Err(IoError::NonFiniteValue {
                        path: self.path.clone(),
                        index,
                        point_index,
                        value,
                    });
                }
                samples.push(value);
            }

            // Already validated above; handle gracefully anyway.
            let trajectory = Trajectory::new(samples).map_err(|_| IoError::EmptyTrajectory {
                path: self.path.clone(),
                index,
            })?;
            trajectories.push(trajectory);
        }

        // 4. Check the declared pose count against the stored poses.
        if raw.pose_count > trajectories.len() {
            return Err(IoError::PoseCountOutOfRange {
                path: self.path.clone(),
                pose_count: raw.pose_count,
                stored: trajectories.len(),
            });
        }
        let stored = trajectories.len();
        let set = CandidateSet::new(name, trajectories, raw.pose_count).map_err(|_| {
            IoError::PoseCountOutOfRange {
                path: self.path.clone(),
                pose_count: raw.pose_count,
                stored,
            }
        })?;

        info!(
            clip = %set.name(),
            n_poses = set.pose_count(),
            n_samples = expected_len,
            "clip loaded"
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_clip(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    fn pose_json(xs: &[f64]) -> String {
        let points: Vec<String> = xs
            .iter()
            .map(|x| format!("{{\"Position\": {{\"X\": {x}, \"Y\": 0.0, \"Z\": 0.0}}}}"))
            .collect();
        format!("{{\"TrajectoryPoints\": [{}]}}", points.join(", "))
    }

    fn clip_json(pose_count: usize, poses: &[&[f64]]) -> String {
        let entries: Vec<String> = poses.iter().map(|xs| pose_json(xs)).collect();
        format!(
            "{{\"PoseCount\": {pose_count}, \"Trajectory\": [{}]}}",
            entries.join(", ")
        )
    }

    #[test]
    fn read_valid_clip() {
        let dir = TempDir::new().unwrap();
        let path = write_clip(
            &dir,
            "walk_01.json",
            &clip_json(2, &[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]),
        );

        let set = ClipReader::new(&path).read().unwrap();
        assert_eq!(set.name().as_str(), "walk_01");
        assert_eq!(set.pose_count(), 2);
        assert_eq!(set.poses()[0].as_ref(), &[1.0, 2.0, 3.0]);
        assert_eq!(set.poses()[1].as_ref(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn pose_count_below_stored_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_clip(&dir, "walk.json", &clip_json(1, &[&[1.0], &[2.0]]));

        let set = ClipReader::new(&path).read().unwrap();
        assert_eq!(set.pose_count(), 1);
        assert_eq!(set.trajectories().len(), 2);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = TempDir::new().unwrap();
        let json = "{\"PoseCount\": 1, \"ClipLength\": 1.25, \"Trajectory\": \
                    [{\"TrajectoryPoints\": [{\"Position\": {\"X\": 7.5, \"Y\": 1.0, \"Z\": 2.0}, \
                    \"RotationZ\": 90.0}]}]}";
        let path = write_clip(&dir, "turn.json", json);

        let set = ClipReader::new(&path).read().unwrap();
        assert_eq!(set.poses()[0].as_ref(), &[7.5]);
    }

    #[test]
    fn error_file_not_found() {
        let result = ClipReader::new(Path::new("/nonexistent/clip.json")).read();
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn error_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_clip(&dir, "bad.json", "{\"PoseCount\": 1, \"Trajectory\": [");
        let result = ClipReader::new(&path).read();
        assert!(matches!(result, Err(IoError::JsonParse { .. })));
    }

    #[test]
    fn error_empty_clip() {
        let dir = TempDir::new().unwrap();
        let path = write_clip(&dir, "empty.json", &clip_json(0, &[]));
        let result = ClipReader::new(&path).read();
        assert!(matches!(result, Err(IoError::EmptyClip { .. })));
    }

    #[test]
    fn error_empty_pose() {
        let dir = TempDir::new().unwrap();
        let json = "{\"PoseCount\": 1, \"Trajectory\": [{\"TrajectoryPoints\": []}]}";
        let path = write_clip(&dir, "hollow.json", json);
        let result = ClipReader::new(&path).read();
        assert!(matches!(result, Err(IoError::EmptyTrajectory { index: 0, .. })));
    }

    #[test]
    fn error_jagged_poses() {
        let dir = TempDir::new().unwrap();
        let path = write_clip(&dir, "jagged.json", &clip_json(2, &[&[1.0, 2.0], &[3.0]]));
        let result = ClipReader::new(&path).read();
        assert!(matches!(
            result,
            Err(IoError::InconsistentTrajectoryLength {
                index: 1,
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn error_overflowing_sample() {
        // 1e999 overflows f64 and parses to infinity.
        let dir = TempDir::new().unwrap();
        let json = "{\"PoseCount\": 1, \"Trajectory\": [{\"TrajectoryPoints\": \
                    [{\"Position\": {\"X\": 1e999}}]}]}";
        let path = write_clip(&dir, "inf.json", json);
        let result = ClipReader::new(&path).read();
        assert!(matches!(result, Err(IoError::NonFiniteValue { .. })));
    }

    #[test]
    fn error_pose_count_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = write_clip(&dir, "overcount.json", &clip_json(3, &[&[1.0], &[2.0]]));
        let result = ClipReader::new(&path).read();
        assert!(matches!(
            result,
            Err(IoError::PoseCountOutOfRange {
                pose_count: 3,
                stored: 2,
                ..
            })
        ));
    }

    #[test]
    fn error_invalid_stem() {
        let dir = TempDir::new().unwrap();
        let path = write_clip(&dir, "bad name!.json", &clip_json(1, &[&[1.0]]));
        let result = ClipReader::new(&path).read();
        assert!(matches!(result, Err(IoError::InvalidClipStem { .. })));
    }
}
