//! Query-set JSON reader.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use kinema_metric::Trajectory;

use crate::IoError;

/// Reads a query-set JSON file: an array of arrays of numbers, one inner
/// array per predicted query trajectory.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::JsonParse`] | Malformed JSON or wrong document shape |
/// | [`IoError::EmptyQuerySet`] | Zero queries in the document |
/// | [`IoError::EmptyTrajectory`] | A query with zero samples |
/// | [`IoError::NonFiniteValue`] | A sample parsed to NaN or infinity |
pub struct QueryReader {
    path: PathBuf,
}

impl QueryReader {
    /// Create a new reader for the given query file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the query file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Vec<Trajectory>, IoError> {
        let file = File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;
        let raw: Vec<Vec<f64>> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| IoError::JsonParse {
                path: self.path.clone(),
                source: e,
            })?;

        if raw.is_empty() {
            return Err(IoError::EmptyQuerySet {
                path: self.path.clone(),
            });
        }

        let mut queries = Vec::with_capacity(raw.len());
        for (index, samples) in raw.into_iter().enumerate() {
            if samples.is_empty() {
                return Err(IoError::EmptyTrajectory {
                    path: self.path.clone(),
                    index,
                });
            }
            if let Some(point_index) = samples.iter().position(|s| !s.is_finite()) {
                return Err(IoError::NonFiniteValue {
                    path: self.path.clone(),
                    index,
                    point_index,
                    value: samples[point_index],
                });
            }
            let query = Trajectory::new(samples).map_err(|_| IoError::EmptyTrajectory {
                path: self.path.clone(),
                index,
            })?;
            queries.push(query);
        }

        info!(n_queries = queries.len(), "query set loaded");
        Ok(queries)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_queries(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("queries.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_valid_queries() {
        let dir = TempDir::new().unwrap();
        let path = write_queries(&dir, "[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]");

        let queries = QueryReader::new(&path).read().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].as_ref(), &[1.0, 2.0, 3.0]);
        assert_eq!(queries[1].as_ref(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn error_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = write_queries(&dir, "[]");
        let result = QueryReader::new(&path).read();
        assert!(matches!(result, Err(IoError::EmptyQuerySet { .. })));
    }

    #[test]
    fn error_empty_query() {
        let dir = TempDir::new().unwrap();
        let path = write_queries(&dir, "[[1.0], []]");
        let result = QueryReader::new(&path).read();
        assert!(matches!(result, Err(IoError::EmptyTrajectory { index: 1, .. })));
    }

    #[test]
    fn error_overflowing_sample() {
        let dir = TempDir::new().unwrap();
        let path = write_queries(&dir, "[[1.0, 1e999]]");
        let result = QueryReader::new(&path).read();
        assert!(matches!(
            result,
            Err(IoError::NonFiniteValue {
                index: 0,
                point_index: 1,
                ..
            })
        ));
    }

    #[test]
    fn error_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = write_queries(&dir, "{\"queries\": []}");
        let result = QueryReader::new(&path).read();
        assert!(matches!(result, Err(IoError::JsonParse { .. })));
    }
}
