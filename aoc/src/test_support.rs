//! Test-only helpers for building inputs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::delimiters::Delimiters;
use crate::core::tokenizer::Tokens;
use crate::core::view::InputView;

/// Write `contents` to `input.txt` in a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_temp_input(contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((dir, path))
}

/// Tokenize `input` and collect the tokens as owned strings.
pub fn token_strings<D>(input: &str, delimiters: &D, skip_empty: bool) -> Vec<String>
where
    D: Delimiters + ?Sized,
{
    Tokens::new(InputView::from(input), delimiters, skip_empty)
        .map(|token| token.to_string())
        .collect()
}
