//! Batch orchestration: feed every word of a semicolon-delimited input
//! through the simulator and stream one result row per word, in input order.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::automaton::{Automaton, AutomatonClass};
use crate::simulator;

/// The outcome of simulating a single word.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub word: String,
    /// Label carried over from the input row, never interpreted.
    pub expected: String,
    pub accepted: bool,
    /// Wall-clock duration of this one simulation.
    pub elapsed: Duration,
}

/// Split a batch row into its `word;expectedLabel` fields.
///
/// Rows with any other field count are not an error; they are skipped by
/// the caller. The word itself may be empty.
pub fn parse_row(line: &str) -> Option<(&str, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(';');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(word), Some(expected), None) => Some((word, expected)),
        _ => None,
    }
}

/// Simulate one word under the precomputed classification, timing the run.
pub fn simulate_word(
    automaton: &Automaton,
    class: AutomatonClass,
    word: &str,
    expected: &str,
) -> SimulationResult {
    let start = Instant::now();
    let accepted = simulator::accepts(automaton, class, word);
    let elapsed = start.elapsed();
    SimulationResult {
        word: word.to_string(),
        expected: expected.to_string(),
        accepted,
        elapsed,
    }
}

/// Write one output row: `word;expectedLabel;resultFlag;elapsedNanoseconds`.
pub fn write_row<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(
        writer,
        "{};{};{};{}",
        result.word,
        result.expected,
        if result.accepted { '1' } else { '0' },
        result.elapsed.as_nanos()
    )
}

/// Run the whole batch: one output row per well-formed input row, in input
/// order. Returns the number of rows processed.
///
/// The classification is computed once by the caller and reused for every
/// word; the automaton itself is never mutated.
pub fn process<R: BufRead, W: Write>(
    automaton: &Automaton,
    class: AutomatonClass,
    input: R,
    output: &mut W,
) -> io::Result<usize> {
    let mut rows = 0;
    for line in input.lines() {
        let line = line?;
        let Some((word, expected)) = parse_row(&line) else {
            continue;
        };
        let result = simulate_word(automaton, class, word, expected);
        write_row(output, &result)?;
        rows += 1;
    }
    Ok(rows)
}
