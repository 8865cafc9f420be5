//! Backing values supplied by the build
//!
//! An empty field means the build never injected that value. Defaults are
//! applied later by [`crate::VersionProvider`], never here.

use crate::error::{Result, StampError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Compile-time environment variable carrying the version string
pub const VERSION_ENV: &str = "BUILDSTAMP_VERSION";
/// Compile-time environment variable carrying the build date
pub const DATE_ENV: &str = "BUILDSTAMP_DATE";
/// Compile-time environment variable carrying the commit hash
pub const COMMIT_ENV: &str = "BUILDSTAMP_COMMIT";

/// Raw build metadata, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildMetadata {
    pub version: String,
    pub date: String,
    pub commit: String,
}

impl BuildMetadata {
    pub fn new(
        version: impl Into<String>,
        date: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            commit: commit.into(),
        }
    }

    /// Values present in the environment when this crate was compiled.
    ///
    /// Use [`build_metadata!`](crate::build_metadata) to capture the values
    /// of the calling crate instead, e.g. when its own `build.rs` injects them.
    pub fn embedded() -> Self {
        Self::new(
            option_env!("BUILDSTAMP_VERSION").unwrap_or_default(),
            option_env!("BUILDSTAMP_DATE").unwrap_or_default(),
            option_env!("BUILDSTAMP_COMMIT").unwrap_or_default(),
        )
    }

    /// Parse a generated stamp file. Missing keys stay empty.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a stamp file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StampError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// True when the build injected none of the three values
    pub fn is_empty(&self) -> bool {
        self.version.is_empty() && self.date.is_empty() && self.commit.is_empty()
    }
}

/// Capture build metadata from the compile-time environment of the calling crate.
///
/// ```
/// let metadata = buildstamp_core::build_metadata!();
/// let info = buildstamp_core::VersionProvider::new(metadata).info();
/// assert!(!info.version.is_empty());
/// ```
#[macro_export]
macro_rules! build_metadata {
    () => {
        $crate::BuildMetadata::new(
            ::core::option_env!("BUILDSTAMP_VERSION").unwrap_or_default(),
            ::core::option_env!("BUILDSTAMP_DATE").unwrap_or_default(),
            ::core::option_env!("BUILDSTAMP_COMMIT").unwrap_or_default(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_stamp_parsing() {
        let metadata = BuildMetadata::from_toml_str(
            r#"
            version = "1.2.3"
            date = "2023-01-01T00:00:00Z"
            commit = "abcdef1"
            "#,
        )
        .unwrap();

        assert_eq!(metadata, BuildMetadata::new("1.2.3", "2023-01-01T00:00:00Z", "abcdef1"));
    }

    #[test]
    fn test_partial_stamp_leaves_missing_fields_empty() {
        let metadata = BuildMetadata::from_toml_str(r#"commit = "abcdef1""#).unwrap();
        assert!(metadata.version.is_empty());
        assert!(metadata.date.is_empty());
        assert_eq!(metadata.commit, "abcdef1");

        assert!(BuildMetadata::from_toml_str("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_stamp_is_rejected() {
        let err = BuildMetadata::from_toml_str("version = ").unwrap_err();
        assert!(matches!(err, StampError::Parse(_)));
    }

    #[test]
    fn test_stamp_file_loading() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "version = \"2.0.0-rc.1\"").unwrap();

        let metadata = BuildMetadata::from_file(file.path()).unwrap();
        assert_eq!(metadata.version, "2.0.0-rc.1");
        assert!(metadata.commit.is_empty());
    }

    #[test]
    fn test_missing_stamp_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BuildMetadata::from_file(dir.path().join("stamp.toml")).unwrap_err();
        assert!(matches!(err, StampError::Io { .. }));
    }

    #[test]
    fn test_macro_matches_embedded_for_this_crate() {
        assert_eq!(crate::build_metadata!(), BuildMetadata::embedded());
    }
}
