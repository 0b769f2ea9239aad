//! Command-line argument parsing for the reviewer
//!
//! Supports:
//! - Generating a draft from a source file at startup
//! - Generation flags (supraqualified parties)
//! - Overriding the export directory

use clap::Parser;
use std::path::PathBuf;

use crate::generation::GenerationOptions;

/// Review a generated deed draft and fill in the missing data
#[derive(Parser, Debug, Default)]
#[command(
    name = "minuta",
    version,
    about = "Review a generated deed draft and fill in the missing data"
)]
pub struct CliArgs {
    /// Source to generate the draft from (.json response or .html draft)
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// The transferring party is supraqualified
    #[arg(long)]
    pub transmitente_supraqualificada: bool,

    /// The acquiring party is supraqualified
    #[arg(long)]
    pub adquirente_supraqualificada: bool,

    /// Directory to export minuta.html into (overrides the config file)
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Source to generate from at startup, if any
    pub source: Option<PathBuf>,
    /// Flags forwarded to generation
    pub options: GenerationOptions,
    /// Export directory override
    pub export_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(source) = &self.source {
            if source.is_dir() {
                return Err(format!(
                    "{} is a directory, expected a .json or .html file",
                    source.display()
                ));
            }
        }

        if let Some(dir) = &self.export_dir {
            if dir.is_file() {
                return Err(format!("{} is not a directory", dir.display()));
            }
        }

        Ok(StartupConfig {
            source: self.source,
            options: GenerationOptions {
                transmitente_supraqualificada: self.transmitente_supraqualificada,
                adquirente_supraqualificada: self.adquirente_supraqualificada,
            },
            export_dir: self.export_dir,
        })
    }
}
