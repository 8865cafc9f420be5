//! Resolved version record and its display line

use crate::error::{Result, StampError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host platform identifiers reported in the version line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

impl Platform {
    /// Platform of the running process
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

/// Build and version information with every field populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub date: String,
    pub commit: String,
}

impl VersionInfo {
    /// Format the version line for an explicit platform:
    /// `<version> #<commit>-<os>-<arch> [<date>]`
    pub fn display_for(&self, platform: &Platform) -> String {
        format!(
            "{} #{}-{}-{} [{}]",
            self.version, self.commit, platform.os, platform.arch, self.date
        )
    }

    /// Parse the build date as RFC 3339
    pub fn parsed_date(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date).map_err(|source| StampError::InvalidDate {
            date: self.date.clone(),
            source,
        })
    }

    /// Leading `len` characters of the commit identifier
    pub fn short_commit(&self, len: usize) -> &str {
        match self.commit.char_indices().nth(len) {
            Some((idx, _)) => &self.commit[..idx],
            None => &self.commit,
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_for(&Platform::current()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VersionInfo {
        VersionInfo {
            version: "1.2.3".to_string(),
            date: "2023-01-01T00:00:00Z".to_string(),
            commit: "abcdef1".to_string(),
        }
    }

    #[test]
    fn test_display_for_platform() {
        let platform = Platform { os: "linux", arch: "amd64" };
        assert_eq!(
            sample().display_for(&platform),
            "1.2.3 #abcdef1-linux-amd64 [2023-01-01T00:00:00Z]"
        );
    }

    #[test]
    fn test_display_uses_host_platform() {
        let expected = format!(
            "1.2.3 #abcdef1-{}-{} [2023-01-01T00:00:00Z]",
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_parsed_date() {
        let date = sample().parsed_date().unwrap();
        assert_eq!(date.timestamp(), 1_672_531_200);

        let mut info = sample();
        info.date = "yesterday".to_string();
        assert!(matches!(info.parsed_date(), Err(StampError::InvalidDate { .. })));
    }

    #[test]
    fn test_short_commit() {
        let mut info = sample();
        assert_eq!(info.short_commit(4), "abcd");
        assert_eq!(info.short_commit(40), "abcdef1");

        info.commit = "develop".to_string();
        assert_eq!(info.short_commit(0), "");
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["version"], "1.2.3");
        assert_eq!(value["commit"], "abcdef1");
        assert_eq!(value["date"], "2023-01-01T00:00:00Z");
    }
}
