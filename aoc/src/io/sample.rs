//! Self-test samples stored as TOML.
//!
//! A sample is a short input together with the answers it must produce:
//!
//! ```toml
//! input = """
//! 5 10 25
//! """
//! part1 = 40
//! part2 = 1
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::answer::{Answer, Answers};
use crate::core::view::InputView;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Sample {
    pub input: String,
    pub part1: Answer,
    pub part2: Answer,
}

impl Sample {
    pub fn new(input: impl Into<String>, expected: Answers) -> Self {
        Self {
            input: input.into(),
            part1: expected.part1,
            part2: expected.part2,
        }
    }

    pub fn view(&self) -> InputView<'_> {
        InputView::from(self.input.as_str())
    }

    pub fn expected(&self) -> Answers {
        Answers {
            part1: self.part1.clone(),
            part2: self.part2.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            return Err(anyhow!("sample input must not be empty"));
        }
        Ok(())
    }
}

/// Parse a sample from TOML text.
pub fn parse_sample(contents: &str) -> Result<Sample> {
    let sample: Sample = toml::from_str(contents).context("parse sample toml")?;
    sample.validate()?;
    Ok(sample)
}

/// Load a sample from a TOML file.
pub fn load_sample(path: &Path) -> Result<Sample> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_sample(&contents).with_context(|| format!("load sample {}", path.display()))
}
