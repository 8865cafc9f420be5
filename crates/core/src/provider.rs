//! Version info provider
//!
//! Resolves a [`BuildMetadata`] into a [`VersionInfo`], substituting defaults
//! for values the build never injected. Defaults are resolved once per
//! provider, so every call observes the same fallback date even when the
//! first calls race.

use crate::error::{Result, StampError};
use crate::info::VersionInfo;
use crate::metadata::BuildMetadata;
use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Fallback version when none was injected
pub const DEFAULT_VERSION: &str = "0.0.0";
/// Fallback commit when none was injected
pub const DEFAULT_COMMIT: &str = "develop";

type Clock = Box<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

/// Resolves build metadata into version info
pub struct VersionProvider {
    metadata: BuildMetadata,
    clock: Clock,
    resolved: OnceLock<VersionInfo>,
}

impl VersionProvider {
    /// Create a provider using the local wall clock for the date fallback
    pub fn new(metadata: BuildMetadata) -> Self {
        Self::with_clock(metadata, || Local::now().fixed_offset())
    }

    /// Create a provider with a custom clock for the date fallback
    pub fn with_clock<F>(metadata: BuildMetadata, clock: F) -> Self
    where
        F: Fn() -> DateTime<FixedOffset> + Send + Sync + 'static,
    {
        Self {
            metadata,
            clock: Box::new(clock),
            resolved: OnceLock::new(),
        }
    }

    /// The metadata as injected, before defaults
    pub fn metadata(&self) -> &BuildMetadata {
        &self.metadata
    }

    /// Version info with defaults applied. Never fails.
    pub fn info(&self) -> VersionInfo {
        self.resolved.get_or_init(|| self.resolve()).clone()
    }

    fn resolve(&self) -> VersionInfo {
        let version = if self.metadata.version.is_empty() {
            debug!("No version injected, using {}", DEFAULT_VERSION);
            DEFAULT_VERSION.to_string()
        } else {
            self.metadata.version.clone()
        };

        let date = if self.metadata.date.is_empty() {
            let now = (self.clock)().to_rfc3339_opts(SecondsFormat::Secs, true);
            debug!("No build date injected, using {}", now);
            now
        } else {
            self.metadata.date.clone()
        };

        let commit = if self.metadata.commit.is_empty() {
            debug!("No commit injected, using {}", DEFAULT_COMMIT);
            DEFAULT_COMMIT.to_string()
        } else {
            self.metadata.commit.clone()
        };

        VersionInfo { version, date, commit }
    }
}

impl fmt::Debug for VersionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionProvider")
            .field("metadata", &self.metadata)
            .field("resolved", &self.resolved.get())
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<VersionProvider> = OnceLock::new();

/// Install the process-wide provider. Call once at startup, before the
/// first [`get_info`].
pub fn install(metadata: BuildMetadata) -> Result<()> {
    GLOBAL
        .set(VersionProvider::new(metadata))
        .map_err(|_| StampError::AlreadyInstalled)
}

/// Version info from the process-wide provider.
///
/// Falls back to [`BuildMetadata::embedded`] when nothing was installed.
pub fn get_info() -> VersionInfo {
    GLOBAL
        .get_or_init(|| VersionProvider::new(BuildMetadata::embedded()))
        .info()
}
