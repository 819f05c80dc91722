//! Input acquisition: a mapped file, or standard input read into memory.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::mapped::MappedSource;
use crate::core::view::InputView;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("open {}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("stat {}", .path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("map {}", .path.display())]
    Map {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("read {what}")]
    Read {
        what: String,
        source: std::io::Error,
    },
    #[error(
        "already mapped {}; reset before mapping {}",
        .held.display(),
        .requested.display()
    )]
    AlreadyMapped { held: PathBuf, requested: PathBuf },
}

/// Acquired puzzle input. Dropping it releases whatever backs the bytes.
#[derive(Debug)]
pub enum Source {
    Mapped(MappedSource),
    Owned(Vec<u8>),
}

impl Source {
    /// Read `reader` to the end into an owned buffer.
    pub fn from_reader(mut reader: impl Read, what: &str) -> Result<Self, SourceError> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|source| SourceError::Read {
                what: what.to_string(),
                source,
            })?;
        debug!(what, len = buf.len(), "read input");
        Ok(Source::Owned(buf))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Source::Mapped(mapped) => mapped.as_bytes(),
            Source::Owned(buf) => buf.as_slice(),
        }
    }

    pub fn view(&self) -> InputView<'_> {
        InputView::new(self.as_bytes())
    }
}

/// Acquire the input named by `path`; `-` reads standard input.
pub fn acquire(path: &Path) -> Result<Source, SourceError> {
    if path.as_os_str() == STDIN_PATH {
        return Source::from_reader(std::io::stdin().lock(), "stdin");
    }
    MappedSource::open(path).map(Source::Mapped)
}
