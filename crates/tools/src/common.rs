//! Output rendering and logging setup for the buildstamp CLI

use anyhow::{Context, Result};
use buildstamp_core::VersionInfo;
use clap::ValueEnum;

/// How version info is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<version> #<commit>-<os>-<arch> [<date>]`
    #[default]
    Text,
    Json,
    Toml,
}

/// Render version info in the requested format
pub fn render(info: &VersionInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(info).context("Failed to serialize version info as JSON")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(info).context("Failed to serialize version info as TOML")
        }
    }
}

/// Initialize logging from the verbosity flags
pub fn init_logging(verbose: bool, debug: bool) {
    let log_level = if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
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
    fn test_render_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("1.2.3 #abcdef1-"));
        assert!(text.ends_with(" [2023-01-01T00:00:00Z]"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: VersionInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_render_toml() {
        let rendered = render(&sample(), OutputFormat::Toml).unwrap();
        assert!(rendered.contains("version = \"1.2.3\""));
        assert!(rendered.contains("commit = \"abcdef1\""));
    }
}
