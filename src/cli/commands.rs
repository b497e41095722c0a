//! Command implementations
//!
//! Wires ingestion, standards resolution, orchestration and persistence
//! together for the CLI, and renders the batch summary.

use crate::app::models::BatchSummary;
use crate::app::services::batch::{BatchOrchestrator, JsonlSink};
use crate::app::services::ingestion::parse_file;
use crate::app::services::standards::{FileStandardsSource, StandardsResolver};
use crate::cli::args::{Args, Commands, ProcessArgs, TemplateArgs};
use crate::config::ProcessingConfig;
use crate::constants::{METADATA_ALIASES, METAL_ALIASES, PARAMETER_ALIASES};
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

/// Dispatch the parsed CLI arguments
pub async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Commands::Process(process_args) => process(process_args).await,
        Commands::Template(template_args) => template(template_args),
    }
}

/// Process one survey table end to end
async fn process(args: ProcessArgs) -> anyhow::Result<()> {
    let mut config = ProcessingConfig::new(
        args.batch_id
            .clone()
            .unwrap_or_else(|| default_batch_id(&args.input)),
    );
    if let Some(secs) = args.standards_timeout {
        config.standards_timeout_secs = secs;
    }
    config.show_progress = !args.quiet;

    let ingest = parse_file(&args.input)
        .with_context(|| format!("ingesting '{}'", args.input.display()))?;

    // Resolve standards exactly once for the whole batch
    let snapshot = match &args.standards {
        Some(path) => {
            let resolver = StandardsResolver::with_source(
                FileStandardsSource::new(path),
                config.standards_timeout(),
            );
            resolver.resolve(&[]).await
        }
        None => StandardsResolver::builtin_only().resolve(&[]).await,
    };

    let sink = JsonlSink::create(&args.output)
        .with_context(|| format!("creating '{}'", args.output.display()))?;
    let orchestrator = BatchOrchestrator::new(&sink, &config);
    let result = orchestrator.process(&ingest, &snapshot).await;
    sink.flush().context("flushing results")?;

    if let Some(path) = &args.summary {
        let json = serde_json::to_string_pretty(&result.summary)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing summary to '{}'", path.display()))?;
    }

    print_summary(&config.batch_id, &result.summary);
    Ok(())
}

/// Render the batch summary to the terminal
fn print_summary(batch_id: &str, summary: &BatchSummary) {
    println!();
    println!("{}", format!("Batch '{}'", batch_id).bold());
    println!(
        "  rows: {} processed, {} failed, {} persisted ({} persistence failures)",
        summary.processed.to_string().green(),
        if summary.failed > 0 {
            summary.failed.to_string().red()
        } else {
            summary.failed.to_string().normal()
        },
        summary.persisted,
        summary.persistence_failures
    );

    if !summary.index_means.is_empty() {
        println!("  {}", "index means".bold());
        for (index, mean) in &summary.index_means {
            println!("    {:<5} {}", index, mean);
        }
    }
    for (index, histogram) in &summary.classification_counts {
        println!("  {}", format!("{} classifications", index).bold());
        for (label, count) in histogram {
            println!("    {:<40} {}", label, count);
        }
    }
    if !summary.row_errors.is_empty() {
        println!("  {}", "row errors".red().bold());
        for error in &summary.row_errors {
            println!("    {}", error);
        }
    }
}

/// Write an empty survey template with every recognized column
fn template(args: TemplateArgs) -> anyhow::Result<()> {
    let mut columns: Vec<&str> = METADATA_ALIASES.iter().map(|(field, _)| *field).collect();
    columns.extend(METAL_ALIASES.iter().map(|(symbol, _)| *symbol));
    columns.extend(PARAMETER_ALIASES.iter().map(|(symbol, _)| *symbol));

    let mut file = std::fs::File::create(&args.output)
        .with_context(|| format!("creating '{}'", args.output.display()))?;
    writeln!(file, "{}", columns.join(","))?;

    // One example row so uploaders can see the expected shape
    let mut example: Vec<String> = vec![
        "1".into(),
        "Example State".into(),
        "Example District".into(),
        "Example Location".into(),
        "77.5946".into(),
        "12.9716".into(),
        "2024".into(),
    ];
    example.resize(columns.len(), String::new());
    writeln!(file, "{}", example.join(","))?;

    println!(
        "Wrote template with {} columns to {}",
        columns.len(),
        args.output.display()
    );
    Ok(())
}

/// Derive a batch identifier from the input file name
fn default_batch_id(input: &std::path::Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "batch".to_string())
}
