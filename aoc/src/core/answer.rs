//! Puzzle answers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One part's answer: an integer or a piece of text.
///
/// Deserializes from either a TOML integer or a string, so sample files can
/// write `part1 = 1985` and `part2 = "5DB3"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Int(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(value) => write!(f, "{value}"),
            Answer::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Int(value)
    }
}

impl From<usize> for Answer {
    fn from(value: usize) -> Self {
        Answer::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// Both parts of a solved puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub part1: Answer,
    pub part2: Answer,
}

impl Answers {
    pub fn new(part1: impl Into<Answer>, part2: impl Into<Answer>) -> Self {
        Self {
            part1: part1.into(),
            part2: part2.into(),
        }
    }
}
