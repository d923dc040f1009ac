//! Stats command implementation.

use clap::Parser;

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    /// Path to a dictionary file or a directory of language files
    #[arg(short, long)]
    pub input: String,

    /// Explicit language code (single-file input only)
    #[arg(short, long)]
    pub language: Option<String>,
}

use anyhow::Result as AnyhowResult;
use phonotok_data::{DataAdapter, IpaDictAdapter};

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let adapter = match &cmd.language {
        Some(code) => IpaDictAdapter::with_language_code(&cmd.input, code),
        None => IpaDictAdapter::new(&cmd.input),
    };

    let dataset = adapter.load()?;
    let report = adapter.validate(&dataset);

    println!("Dataset statistics:");
    println!("  Total entries: {}", report.stats.total_entries);
    println!("  Unique words: {}", report.stats.unique_words);
    println!("  Languages: {}", report.stats.languages.join(", "));
    println!("  Avg word length: {:.2}", report.stats.avg_word_length);
    println!(
        "  Avg pronunciation length: {:.2}",
        report.stats.avg_pronunciation_length
    );

    println!();
    println!("Entries per language:");
    for (language, count) in dataset.language_counts() {
        println!("  {}: {}", language, count);
    }

    if !dataset.warnings().is_empty() {
        println!();
        println!("Skipped lines:");
        for warning in dataset.warnings() {
            println!("  {}", warning);
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!("Validation warnings:");
        for warning in &report.warnings {
            println!("  {}", warning);
        }
    }

    Ok(())
}
