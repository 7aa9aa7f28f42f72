//! Batch command for extracting fields from many reports.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local};
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, error, warn};

use secrimpo_core::{CaseRecordParser, ExtractionResult, Field, RecordParser};

use super::extract::{read_input, render, FormatArg, RenderOptions};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input glob pattern (e.g. "reports/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Emit the form keys instead of the raw field map
    #[arg(long)]
    form: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileOutcome {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
    processed_at: DateTime<Local>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = CaseRecordParser::from_config(&config.extraction);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.max(1))
        .build()?;

    let outcomes: Vec<FileOutcome> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let outcome = process_single_file(path, &parser);
                progress.inc(1);
                outcome
            })
            .collect()
    });

    progress.finish_with_message("Complete");

    if !args.continue_on_error {
        if let Some(failed) = outcomes.iter().find(|o| o.error.is_some()) {
            let message = failed.error.as_deref().unwrap_or("unknown error");
            error!("Failed to process {}: {}", failed.path.display(), message);
            anyhow::bail!("Processing failed: {}", message);
        }
    }

    let options = RenderOptions::resolve(&config, args.format, args.form, args.pretty);

    if let Some(output_dir) = &args.output_dir {
        for outcome in &outcomes {
            let Some(result) = &outcome.result else {
                continue;
            };

            let output_name = outcome
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("report");
            let output_path = output_dir.join(format!("{}.{}", output_name, options.extension()));

            fs::write(&output_path, render(result, options)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<&FileOutcome> = outcomes.iter().filter(|o| o.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(outcomes.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: &Path, parser: &CaseRecordParser) -> FileOutcome {
    let processed_at = Local::now();

    match read_input(path) {
        Ok(text) if text.trim().is_empty() => {
            warn!("Skipping empty report {}", path.display());
            FileOutcome {
                path: path.to_path_buf(),
                result: None,
                error: Some("report is empty".to_string()),
                processed_at,
            }
        }
        Ok(text) => FileOutcome {
            path: path.to_path_buf(),
            result: Some(parser.parse(&text)),
            error: None,
            processed_at,
        },
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            FileOutcome {
                path: path.to_path_buf(),
                result: None,
                error: Some(e.to_string()),
                processed_at,
            }
        }
    }
}

/// Summary columns taken from the raw field map.
const SUMMARY_FIELDS: [Field; 5] = [
    Field::NumeroGenesis,
    Field::DataApreensao,
    Field::Nome,
    Field::Especie,
    Field::NomePolicial,
];

fn write_summary(path: &Path, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status", "processed_at"];
    header.extend(SUMMARY_FIELDS.iter().map(|f| f.key()));
    header.extend(["resolved_fields", "processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let processed_at = outcome.processed_at.to_rfc3339();

        let mut record: Vec<String> = vec![filename.to_string()];

        if let Some(result) = &outcome.result {
            record.push("success".to_string());
            record.push(processed_at);
            record.extend(
                SUMMARY_FIELDS
                    .iter()
                    .map(|f| result.fields.get(*f).unwrap_or_default().to_string()),
            );
            record.push((Field::ALL.len() - result.fields.missing().len()).to_string());
            record.push(result.processing_time_ms.to_string());
            record.push(String::new());
        } else {
            record.push("error".to_string());
            record.push(processed_at);
            record.extend(SUMMARY_FIELDS.iter().map(|_| String::new()));
            record.push(String::new());
            record.push(String::new());
            record.push(outcome.error.clone().unwrap_or_default());
        }

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
