//! buildstamp - report build-time version metadata

use anyhow::{Context, Result};
use buildstamp_build_helpers::version;
use buildstamp_core::{build_metadata, BuildMetadata};
use buildstamp_tools::{init_logging, render, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

/// Build-time version metadata reporter
#[derive(Parser)]
#[command(name = "buildstamp")]
#[command(about = "Report build-time version metadata")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version information and exit
    #[arg(short = 'V', long)]
    version: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the version info of this binary or of a stamp file
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Read metadata from a stamp file instead of the embedded values
        #[arg(long)]
        stamp: Option<PathBuf>,
    },
    /// Print the stamp a build of DIR would inject
    Probe {
        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Write the stamp to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    buildstamp_core::install(build_metadata!()).context("Failed to install version provider")?;

    if cli.version {
        println!("{}", buildstamp_core::get_info());
        return Ok(());
    }

    match cli.command {
        Some(Commands::Show { format, stamp }) => {
            let info = match stamp {
                Some(path) => {
                    info!("Reading stamp file {:?}", path);
                    let metadata = BuildMetadata::from_file(&path)?;
                    buildstamp_core::VersionProvider::new(metadata).info()
                }
                None => buildstamp_core::get_info(),
            };
            println!("{}", render(&info, format)?);
        }
        Some(Commands::Probe { dir, output }) => {
            debug!("Probing {:?}", dir);
            let metadata = version::probe(&dir);
            match output {
                Some(path) => {
                    version::write_stamp_file(&metadata, &path)?;
                    info!("Wrote stamp to {:?}", path);
                }
                None => print!("{}", version::to_toml(&metadata)?),
            }
        }
        None => println!("{}", buildstamp_core::get_info()),
    }

    Ok(())
}
