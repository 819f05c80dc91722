//! Built-in `stats` puzzle.
//!
//! Part 1 sums every integer token (split on whitespace and commas, other
//! words skipped). Part 2 counts non-empty lines.

use anyhow::Result;

use crate::core::answer::Answers;
use crate::core::delimiters::DelimiterSet;
use crate::core::integer::integers;
use crate::core::view::InputView;
use crate::harness::Puzzle;
use crate::io::sample::{Sample, parse_sample};

const NUMBER_DELIMITERS: DelimiterSet = DelimiterSet::new(b" \t\r\n,");
const DEFAULT_SAMPLE: &str = include_str!("../samples/stats.toml");

#[derive(Debug, Clone, Copy, Default)]
pub struct Stats;

impl Puzzle for Stats {
    fn name(&self) -> &str {
        "stats"
    }

    fn solve(&self, input: InputView<'_>) -> Result<Answers> {
        let sum = integers(input, &NUMBER_DELIMITERS).fold(0_i64, i64::wrapping_add);
        let lines = input.lines().count();
        Ok(Answers::new(sum, lines))
    }
}

/// The sample shipped with the binary.
pub fn default_sample() -> Result<Sample> {
    parse_sample(DEFAULT_SAMPLE)
}
