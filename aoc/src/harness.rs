//! Solve a puzzle, print its answers, and check them in self-test mode.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::answer::{Answer, Answers};
use crate::core::view::InputView;
use crate::io::sample::Sample;
use crate::io::source::acquire;

/// A solver turning one input into two answers.
pub trait Puzzle {
    fn name(&self) -> &str;

    fn solve(&self, input: InputView<'_>) -> Result<Answers>;
}

/// Where the input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Solve the file at this path (`-` for stdin).
    File(PathBuf),
    /// Solve the sample and compare against its expected answers.
    SelfTest(Sample),
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Answers printed for real input; nothing to check.
    Solved,
    /// Self-test answers all matched.
    Verified,
    /// A self-test answer differed from the expected value.
    Mismatch,
}

/// Run `puzzle` in `mode`, writing answers and verdicts to `out`.
pub fn run_puzzle<P, W>(puzzle: &P, mode: &Mode, out: &mut W) -> Result<Outcome>
where
    P: Puzzle + ?Sized,
    W: Write,
{
    match mode {
        Mode::File(path) => {
            let source = acquire(path)?;
            debug!(puzzle = puzzle.name(), path = %path.display(), len = source.as_bytes().len(), "solving input");
            let answers = puzzle
                .solve(source.view())
                .with_context(|| format!("solve {} on {}", puzzle.name(), path.display()))?;
            print_results(out, &answers)?;
            Ok(Outcome::Solved)
        }
        Mode::SelfTest(sample) => {
            debug!(puzzle = puzzle.name(), "solving sample");
            let answers = puzzle
                .solve(sample.view())
                .with_context(|| format!("solve {} on sample", puzzle.name()))?;
            print_results(out, &answers)?;

            let expected = sample.expected();
            for (got, want) in [
                (&answers.part1, &expected.part1),
                (&answers.part2, &expected.part2),
            ] {
                if !check_answer(out, got, want)? {
                    return Ok(Outcome::Mismatch);
                }
            }
            info!(puzzle = puzzle.name(), "sample verified");
            Ok(Outcome::Verified)
        }
    }
}

/// Write `Part 1: <value>` and `Part 2: <value>`.
pub fn print_results<W: Write>(out: &mut W, answers: &Answers) -> Result<()> {
    print_result(out, 1, &answers.part1)?;
    print_result(out, 2, &answers.part2)
}

pub fn print_result<W: Write>(out: &mut W, part: u8, answer: &Answer) -> Result<()> {
    writeln!(out, "Part {part}: {answer}").context("write result")?;
    Ok(())
}

/// Write `Expected: <e> Got: <r> OK|FAILED`; returns whether they matched.
pub fn check_answer<W: Write>(out: &mut W, got: &Answer, expected: &Answer) -> Result<bool> {
    let matched = got == expected;
    let verdict = if matched { "OK" } else { "FAILED" };
    writeln!(out, "Expected: {expected} Got: {got} {verdict}").context("write verdict")?;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::delimiters::DelimiterSet;
    use crate::test_support::write_temp_input;

    /// Counts tokens and lines; enough to drive the harness.
    struct CountTokens;

    impl Puzzle for CountTokens {
        fn name(&self) -> &str {
            "count"
        }

        fn solve(&self, input: InputView<'_>) -> Result<Answers> {
            let tokens = input.tokens(&DelimiterSet::WHITESPACE).count();
            let lines = input.lines().count();
            Ok(Answers::new(tokens, lines))
        }
    }

    fn run(mode: &Mode) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_puzzle(&CountTokens, mode, &mut out).expect("run");
        (outcome, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn self_test_passes_with_matching_answers() {
        let sample = Sample::new("a b\nc", Answers::new(3_i64, 2_i64));
        let (outcome, out) = run(&Mode::SelfTest(sample));
        assert_eq!(outcome, Outcome::Verified);
        assert_eq!(
            out,
            "Part 1: 3\nPart 2: 2\nExpected: 3 Got: 3 OK\nExpected: 2 Got: 2 OK\n"
        );
    }

    #[test]
    fn self_test_stops_at_first_mismatch() {
        let sample = Sample::new("a b\nc", Answers::new(4_i64, 9_i64));
        let (outcome, out) = run(&Mode::SelfTest(sample));
        assert_eq!(outcome, Outcome::Mismatch);
        assert!(out.ends_with("Expected: 4 Got: 3 FAILED\n"));
        assert!(!out.contains("Expected: 9"));
    }

    #[test]
    fn text_and_int_answers_differ() {
        let mut out = Vec::new();
        let matched =
            check_answer(&mut out, &Answer::Int(8), &Answer::from("8")).expect("check");
        assert!(!matched);
    }

    #[test]
    fn file_mode_prints_answers_only() {
        let (_dir, path) = write_temp_input("x y z\n\nw\n").expect("temp input");
        let (outcome, out) = run(&Mode::File(path));
        assert_eq!(outcome, Outcome::Solved);
        assert_eq!(out, "Part 1: 4\nPart 2: 2\n");
    }

    #[test]
    fn file_mode_missing_input_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut out = Vec::new();
        let err = run_puzzle(&CountTokens, &Mode::File(dir.path().join("gone")), &mut out)
            .expect_err("missing");
        assert!(format!("{err:#}").contains("gone"));
        assert!(out.is_empty());
    }
}
