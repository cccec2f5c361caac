use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use automata_sim::{batch, Automaton};
use clap::Parser;

/// Classify a finite-automaton description and test a batch of words
/// against it, one timed result row per word.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON automaton description
    automaton: PathBuf,
    /// Batch input, one `word;expectedLabel` row per line
    input: PathBuf,
    /// Batch output destination
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let automaton = Automaton::from_path(&args.automaton)?;
    let class = automaton.classify();

    let input = BufReader::new(
        File::open(&args.input)
            .with_context(|| format!("unable to open batch input `{}`", args.input.display()))?,
    );
    // Created only once the automaton is known to be well-formed, so a bad
    // description never leaves a partial output file behind.
    let mut output = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("unable to create batch output `{}`", args.output.display()))?,
    );

    let rows = batch::process(&automaton, class, input, &mut output)
        .context("failed while processing the batch")?;
    output.flush().context("failed to flush batch output")?;

    eprintln!("{class}: {rows} word(s) processed");
    Ok(())
}
