//! unforge CLI - converts CryXmlB binary XML files to text.
//!
//! This is the main entry point for the unforge command-line application.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use memmap2::Mmap;
use rayon::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkdir::WalkDir;

use unforge::prelude::*;

/// unforge - convert CryXmlB binary XML to XML or JSON text
#[derive(Parser)]
#[command(name = "unforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CryXmlB files or directories to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (mirrors paths relative to each input)
    #[arg(
        short,
        long,
        env = "UNFORGE_OUTPUT",
        conflicts_with = "in_place",
        required_unless_present = "in_place"
    )]
    output: Option<PathBuf>,

    /// Overwrite each CryXmlB file with its converted text
    #[arg(long)]
    in_place: bool,

    /// Only convert files whose name matches this glob when walking directories
    #[arg(short, long)]
    filter: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Xml)]
    format: Format,

    /// Convert files in parallel
    #[arg(short = 'j', long)]
    parallel: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Xml,
    Json,
}

/// One file to convert.
#[derive(Debug)]
struct Job {
    source: PathBuf,
    /// Path relative to the input it was found under.
    relative: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Converted,
    /// Not a CryXmlB file.
    Skipped,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let filter = cli
        .filter
        .as_deref()
        .map(glob::Pattern::new)
        .transpose()
        .context("Invalid filter pattern")?;

    let jobs = collect_jobs(&cli.inputs, filter.as_ref())?;
    tracing::info!(files = jobs.len(), "collected input files");

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(jobs.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let run = |job: &Job| {
        let target = target_path(job, cli.output.as_deref(), cli.format);
        let result = convert_file(&job.source, &target, cli.format)
            .with_context(|| format!("Failed to convert {}", job.source.display()));
        if let Err(e) = &result {
            pb.suspend(|| tracing::warn!("{e:#}"));
        }
        pb.inc(1);
        result
    };

    let results: Vec<Result<Outcome>> = if cli.parallel {
        jobs.par_iter().map(run).collect()
    } else {
        jobs.iter().map(run).collect()
    };

    pb.finish_with_message("Done");

    let converted = results
        .iter()
        .filter(|r| matches!(r, Ok(Outcome::Converted)))
        .count();
    let skipped = results
        .iter()
        .filter(|r| matches!(r, Ok(Outcome::Skipped)))
        .count();
    let failed = results.iter().filter(|r| r.is_err()).count();

    println!(
        "Converted {} files in {:?} ({} skipped, {} errors)",
        converted,
        start.elapsed(),
        skipped,
        failed
    );

    if failed > 0 {
        anyhow::bail!("{} of {} files failed to convert", failed, results.len());
    }

    Ok(())
}

/// Expand the inputs into individual files, walking directories.
fn collect_jobs(inputs: &[PathBuf], filter: Option<&glob::Pattern>) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();

    for input in inputs {
        if input.is_file() {
            let relative = input
                .file_name()
                .map(PathBuf::from)
                .with_context(|| format!("Invalid input path: {}", input.display()))?;
            jobs.push(Job {
                source: input.clone(),
                relative,
            });
            continue;
        }

        if !input.is_dir() {
            anyhow::bail!("Input not found: {}", input.display());
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk {}", input.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(pattern) = filter {
                let name = entry.file_name().to_string_lossy();
                if !pattern.matches(&name) {
                    continue;
                }
            }

            let relative = entry
                .path()
                .strip_prefix(input)
                .unwrap_or(entry.path())
                .to_path_buf();
            jobs.push(Job {
                source: entry.into_path(),
                relative,
            });
        }
    }

    Ok(jobs)
}

/// Where the converted text for `job` is written.
fn target_path(job: &Job, output: Option<&Path>, format: Format) -> PathBuf {
    let path = match output {
        Some(dir) => dir.join(&job.relative),
        None => job.source.clone(),
    };

    match format {
        Format::Xml => path,
        Format::Json => path.with_extension("json"),
    }
}

/// Decode one file and write its text form.
fn convert_file(source: &Path, target: &Path, format: Format) -> Result<Outcome> {
    let file = File::open(source).context("Failed to open input file")?;
    if file.metadata()?.len() < 8 {
        return Ok(Outcome::Skipped);
    }

    // SAFETY: the file is only read, and the map is dropped before any write.
    let mmap = unsafe { Mmap::map(&file) }.context("Failed to map input file")?;

    if !CryXmlReader::is_cryxml(&mmap) {
        tracing::debug!(path = %source.display(), "not a CryXmlB file, skipping");
        return Ok(Outcome::Skipped);
    }

    let document = decode(&mmap).context("Failed to parse CryXmlB")?;
    let text = match format {
        Format::Xml => document.to_xml_string(),
        Format::Json => document.to_json_string(),
    }
    .context("Failed to render document")?;
    drop(mmap);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, text).context("Failed to write output file")?;

    tracing::debug!(
        path = %source.display(),
        elements = document.element_count(),
        "converted"
    );

    Ok(Outcome::Converted)
}
