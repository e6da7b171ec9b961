//! CLI commands for data export
//!
//! JSON is the full backup that `import` reads back. CSV covers
//! transactions only; YAML is a human-readable copy of everything.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Args, ValueEnum};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_snapshot, export_snapshot_yaml, export_transactions_csv};
use crate::store::Store;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON backup (full state, can be imported)
    Json,
    /// CSV format (transactions only)
    Csv,
    /// YAML format (full state, human-readable)
    Yaml,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }
}

/// Options for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (defaults to the backups directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn create_file(output: &Path) -> TrackerResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        TrackerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle the export command
pub fn handle_export_command(
    store: &Store,
    paths: &TrackerPaths,
    args: ExportArgs,
) -> TrackerResult<()> {
    let now = Utc::now();
    let document = export_snapshot(store, now)?;

    let output = match args.output {
        Some(output) => output,
        None => {
            fs::create_dir_all(paths.backup_dir())?;
            paths
                .backup_dir()
                .join(&document.file_name)
                .with_extension(args.format.extension())
        }
    };

    match args.format {
        ExportFormat::Json => {
            let mut writer = create_file(&output)?;
            writer
                .write_all(document.contents.as_bytes())
                .and_then(|_| writer.flush())
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            println!("Backup exported to: {}", output.display());
        }
        ExportFormat::Csv => {
            let mut writer = create_file(&output)?;
            export_transactions_csv(store.transactions(), &mut writer)?;
            println!(
                "Exported {} transactions to: {}",
                store.transactions().len(),
                output.display()
            );
            println!("Note: CSV format exports transactions only. Use JSON for a full backup.");
        }
        ExportFormat::Yaml => {
            let mut writer = create_file(&output)?;
            export_snapshot_yaml(store.state(), now, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            println!("Full data exported to: {}", output.display());
        }
    }

    Ok(())
}
