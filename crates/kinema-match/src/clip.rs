//! Clip identifier.

use std::fmt;

use crate::error::MatchError;

/// A validated motion-clip name.
///
/// Clip names feed output file naming, so they must match `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipName(String);

impl ClipName {
    /// Parse and validate a clip name.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidClipName`] if the name is empty or
    /// contains characters outside `[a-zA-Z0-9_-]`.
    pub fn new(name: String) -> Result<Self, MatchError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(MatchError::InvalidClipName { name });
        }
        Ok(Self(name))
    }

    /// Return the clip name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
