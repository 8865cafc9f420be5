//! Version metadata probing for build scripts

use anyhow::{Context, Result};
use buildstamp_core::metadata::{COMMIT_ENV, DATE_ENV, VERSION_ENV};
use buildstamp_core::BuildMetadata;
use chrono::{SecondsFormat, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Reproducible-builds timestamp override
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Collect version, commit and build date for the project in `dir`.
///
/// Anything that cannot be determined is left empty so the runtime applies
/// its own defaults.
pub fn probe(dir: &Path) -> BuildMetadata {
    let version = git(dir, &["describe", "--tags"])
        .or_else(|| version_file(dir))
        .unwrap_or_default();
    let commit = git(dir, &["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let date = build_date(std::env::var(SOURCE_DATE_EPOCH).ok().as_deref());

    BuildMetadata::new(version, date, commit)
}

/// Build date as RFC 3339 UTC, honouring a `SOURCE_DATE_EPOCH` value
pub fn build_date(source_date_epoch: Option<&str>) -> String {
    source_date_epoch
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Existing files whose change should rerun the build script of `dir`.
///
/// The git directory is located through git itself, so packages nested in a
/// workspace track the repository root rather than a missing `dir/.git`.
pub fn rerun_paths(dir: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(git_dir) = git(dir, &["rev-parse", "--absolute-git-dir"]).map(PathBuf::from) {
        let common_dir = git(dir, &["rev-parse", "--git-common-dir"])
            .map(|common| absolute(dir, PathBuf::from(common)))
            .unwrap_or_else(|| git_dir.clone());

        paths.push(git_dir.join("HEAD"));
        for name in ["refs/heads", "refs/tags", "packed-refs"] {
            paths.push(common_dir.join(name));
        }
    }
    paths.push(absolute(dir, PathBuf::from("VERSION")));

    paths.retain(|path| path.exists());
    paths
}

/// Cargo directives that inject `metadata` into the crate being built from `dir`
pub fn rustc_env_lines(dir: &Path, metadata: &BuildMetadata) -> Vec<String> {
    let mut lines: Vec<String> = rerun_paths(dir)
        .iter()
        .map(|path| format!("cargo:rerun-if-changed={}", path.display()))
        .collect();
    lines.push(format!("cargo:rerun-if-env-changed={}", SOURCE_DATE_EPOCH));

    for (key, value) in [
        (VERSION_ENV, &metadata.version),
        (DATE_ENV, &metadata.date),
        (COMMIT_ENV, &metadata.commit),
    ] {
        if value.is_empty() {
            lines.push(format!("cargo:warning=no value for {}, runtime default applies", key));
        } else {
            lines.push(format!("cargo:rustc-env={}={}", key, value));
        }
    }

    lines
}

/// Print the cargo directives for `metadata`
pub fn emit_rustc_env(dir: &Path, metadata: &BuildMetadata) {
    for line in rustc_env_lines(dir, metadata) {
        println!("{}", line);
    }
}

/// Render a stamp file readable by [`BuildMetadata::from_toml_str`]
pub fn to_toml(metadata: &BuildMetadata) -> Result<String> {
    toml::to_string_pretty(metadata).context("Failed to serialize build stamp")
}

/// Write a stamp file readable by [`BuildMetadata::from_file`]
pub fn write_stamp_file(metadata: &BuildMetadata, path: &Path) -> Result<()> {
    let content = to_toml(metadata)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write stamp file: {:?}", path))?;

    Ok(())
}

fn git(dir: &Path, args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}

fn absolute(base: &Path, path: PathBuf) -> PathBuf {
    let path = if path.is_relative() { base.join(path) } else { path };
    path.canonicalize().unwrap_or(path)
}

fn version_file(dir: &Path) -> Option<String> {
    fs::read_to_string(dir.join("VERSION"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
