//! Build helpers that inject version metadata
//!
//! Call from a `build.rs`:
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     buildstamp_build_helpers::stamp_from_build_script()?;
//!     Ok(())
//! }
//! ```

pub mod version;

use anyhow::{Context, Result};
use buildstamp_core::BuildMetadata;
use std::path::PathBuf;

/// Probe the package being built and emit its metadata as compile-time
/// environment variables.
pub fn stamp_from_build_script() -> Result<BuildMetadata> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .context("CARGO_MANIFEST_DIR not set, not running inside a build script")?;

    let metadata = version::probe(&manifest_dir);
    version::emit_rustc_env(&manifest_dir, &metadata);

    Ok(metadata)
}
