//! Read-only memory-mapped input files.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tracing::debug;

use super::source::SourceError;
use crate::core::view::InputView;

/// Owns an open file and its read-only mapping.
///
/// Either unmapped, or mapped with both the file and the region held. Both
/// are released on [`reset`](Self::reset) or drop: the region first, then
/// the file.
#[derive(Debug, Default)]
pub struct MappedSource {
    state: State,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Unmapped,
    Mapped {
        // Field order is drop order: unmap before close.
        region: Region,
        file: File,
        path: PathBuf,
    },
}

#[derive(Debug)]
enum Region {
    /// Zero-length files cannot be mapped; they view as empty input.
    Empty,
    Map(Mmap),
}

impl MappedSource {
    /// An unmapped source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and map `path` in one step.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let mut source = Self::new();
        source.map_file(path)?;
        Ok(source)
    }

    /// Map `path`. Fails with [`SourceError::AlreadyMapped`] if a file is
    /// already held; call [`reset`](Self::reset) first or use
    /// [`remap`](Self::remap).
    pub fn map_file(&mut self, path: impl AsRef<Path>) -> Result<(), SourceError> {
        let path = path.as_ref();
        if let State::Mapped { path: held, .. } = &self.state {
            return Err(SourceError::AlreadyMapped {
                held: held.clone(),
                requested: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let len = file
            .metadata()
            .map_err(|source| SourceError::Metadata {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let region = if len == 0 {
            Region::Empty
        } else {
            Region::Map(map_read_only(&file).map_err(|source| SourceError::Map {
                path: path.to_path_buf(),
                source,
            })?)
        };

        debug!(path = %path.display(), len, "mapped input file");
        self.state = State::Mapped {
            region,
            file,
            path: path.to_path_buf(),
        };
        Ok(())
    }

    /// Release the region and the file. A no-op when unmapped.
    pub fn reset(&mut self) {
        if let State::Mapped { region, file, path } = std::mem::take(&mut self.state) {
            drop(region);
            drop(file);
            debug!(path = %path.display(), "released input file");
        }
    }

    /// [`reset`](Self::reset), then map `path`.
    pub fn remap(&mut self, path: impl AsRef<Path>) -> Result<(), SourceError> {
        self.reset();
        self.map_file(path)
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.state, State::Mapped { .. })
    }

    /// Path of the mapped file, if any.
    pub fn path(&self) -> Option<&Path> {
        match &self.state {
            State::Mapped { path, .. } => Some(path),
            State::Unmapped => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.state {
            State::Mapped {
                region: Region::Map(map),
                ..
            } => &map[..],
            _ => &[],
        }
    }

    /// View of the mapped bytes; empty when unmapped.
    pub fn view(&self) -> InputView<'_> {
        InputView::new(self.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for MappedSource {
    fn drop(&mut self) {
        self.reset();
    }
}

#[allow(unsafe_code, reason = "memory-mapping a file is inherently unsafe")]
fn map_read_only(file: &File) -> std::io::Result<Mmap> {
    // SAFETY: the map is read-only and only ever exposed as `&[u8]` borrowed
    // from the owning `MappedSource`. Truncating the file underneath a live
    // mapping is outside what this tool supports.
    unsafe { Mmap::map(file) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_temp_input;

    #[test]
    fn maps_file_contents() {
        let (_dir, path) = write_temp_input("R8, R4, R4, R8").expect("temp input");
        let source = MappedSource::open(&path).expect("map");
        assert!(source.is_mapped());
        assert_eq!(source.view().as_bytes(), b"R8, R4, R4, R8");
        assert_eq!(source.path(), Some(path.as_path()));
    }

    #[test]
    fn double_map_is_rejected() {
        let (_dir, path) = write_temp_input("abc").expect("temp input");
        let mut source = MappedSource::open(&path).expect("map");
        let err = source.map_file(&path).expect_err("second map must fail");
        assert!(matches!(err, SourceError::AlreadyMapped { .. }));
        assert_eq!(source.as_bytes(), b"abc");
    }

    #[test]
    fn reset_allows_mapping_again() {
        let (_dir, first) = write_temp_input("first").expect("temp input");
        let (_dir2, second) = write_temp_input("second").expect("temp input");
        let mut source = MappedSource::open(&first).expect("map");

        source.reset();
        assert!(!source.is_mapped());
        assert!(source.view().is_empty());
        source.reset();

        source.map_file(&second).expect("map after reset");
        assert_eq!(source.as_bytes(), b"second");

        source.remap(&first).expect("remap");
        assert_eq!(source.as_bytes(), b"first");
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = MappedSource::open(dir.path().join("missing.txt")).expect_err("missing");
        assert!(matches!(err, SourceError::Open { .. }));
    }

    #[test]
    fn empty_file_views_as_empty() {
        let (_dir, path) = write_temp_input("").expect("temp input");
        let source = MappedSource::open(&path).expect("map");
        assert!(source.is_mapped());
        assert!(source.is_empty());
    }

    #[test]
    fn failed_map_leaves_source_unmapped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut source = MappedSource::new();
        assert!(source.map_file(dir.path().join("nope")).is_err());
        assert!(!source.is_mapped());
    }
}
