//! buildstamp core - build-time version metadata
//!
//! Exposes the version, build date and commit injected by the build, with
//! fallback defaults for anything left out:
//!
//! ```
//! use buildstamp_core::{BuildMetadata, VersionProvider};
//!
//! let provider = VersionProvider::new(BuildMetadata::new("1.2.3", "", "abcdef1"));
//! let info = provider.info();
//! assert_eq!(info.version, "1.2.3");
//! assert_eq!(info.commit, "abcdef1");
//! assert!(info.parsed_date().is_ok());
//! ```

pub mod error;
pub mod info;
pub mod metadata;
pub mod provider;

pub use error::{Result, StampError};
pub use info::{Platform, VersionInfo};
pub use metadata::BuildMetadata;
pub use provider::{get_info, install, VersionProvider};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        error::{Result, StampError},
        info::{Platform, VersionInfo},
        metadata::BuildMetadata,
        provider::{get_info, install, VersionProvider, DEFAULT_COMMIT, DEFAULT_VERSION},
    };
}
