//! Build command implementation.

use clap::Parser;

/// Build command arguments.
#[derive(Parser)]
pub struct BuildCommand {
    /// Path to a dictionary file or a directory of language files
    #[arg(short, long)]
    pub input: String,

    /// Output directory for vocabulary JSON files
    #[arg(short, long, default_value = "tokenizers")]
    pub output: String,

    /// Explicit language code (single-file input only)
    #[arg(short, long)]
    pub language: Option<String>,
}

use anyhow::Result as AnyhowResult;
use phonotok_core::{Modality, VocabularyModel};
use phonotok_data::{DataAdapter, IpaDictAdapter};
use phonotok_tokenizer::{save_vocabulary, vocabulary_filename};
use std::path::Path;

pub fn run(cmd: BuildCommand) -> AnyhowResult<()> {
    let adapter = match &cmd.language {
        Some(code) => IpaDictAdapter::with_language_code(&cmd.input, code),
        None => IpaDictAdapter::new(&cmd.input),
    };

    let (dataset, report) = adapter.load_validated()?;
    println!(
        "Loaded {} entries across {} language(s)",
        dataset.len(),
        report.stats.unique_languages
    );
    if !dataset.warnings().is_empty() {
        println!("  {} line(s) skipped during load", dataset.warnings().len());
    }
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
    println!();

    let output_dir = Path::new(&cmd.output);
    for language in dataset.languages() {
        let words: Vec<&str> = dataset
            .records()
            .iter()
            .filter(|r| r.language.as_str() == language)
            .map(|r| r.word.as_str())
            .collect();
        let pronunciations: Vec<&str> = dataset
            .records()
            .iter()
            .filter(|r| r.language.as_str() == language)
            .map(|r| r.pronunciation.as_str())
            .collect();

        for (modality, texts) in [
            (Modality::Spelling, &words),
            (Modality::Ipa, &pronunciations),
        ] {
            let model = VocabularyModel::from_texts(&language, modality, texts.iter().copied());
            let path = output_dir.join(vocabulary_filename(&language, modality));
            save_vocabulary(&model, &path)?;

            println!("Vocabulary saved to {}", path.display());
            println!("  Language: {}", model.language);
            println!("  Modality: {}", model.modality);
            println!("  Symbols: {}", model.symbol_count());
            println!("  Total tokens (with special): {}", model.vocab_size());
        }
    }

    Ok(())
}
