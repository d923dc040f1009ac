//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the vocabulary JSON file
    #[arg(short, long)]
    pub vocabulary: String,

    /// Token ids to decode (comma-separated)
    #[arg(short, long)]
    pub tokens: String,

    /// Skip structural special tokens during decoding
    #[arg(short, long, default_value_t = false)]
    pub skip_special: bool,
}

use anyhow::Result as AnyhowResult;
use phonotok_tokenizer::CharTokenizer;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let codec = CharTokenizer::load(&cmd.vocabulary)?;

    let ids: Vec<u32> = cmd
        .tokens
        .split(',')
        .map(|s| s.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;

    let text = codec.decode(&ids, cmd.skip_special);

    println!("{}", text);

    Ok(())
}
