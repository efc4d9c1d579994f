//! Document value objects: staged uploads and ingested documents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Generation counter scoping the currently staged upload batch.
///
/// Rotated every time the staging area is cleared (typically after a
/// successful submission). Staged files recorded under an older generation
/// must never be read again; `SessionState::staged_files` enforces this by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct UploadGeneration(pub u64);

impl UploadGeneration {
    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for UploadGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}

/// A file selected in the staging area but not yet submitted for ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    pub name: String,
    pub path: PathBuf,
}

impl StagedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }
}

/// Descriptor of a successfully ingested document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub name: String,
    /// Number of retrievable chunks produced by ingestion.
    pub chunk_count: usize,
}

impl DocumentInfo {
    pub fn new(name: impl Into<String>, chunk_count: usize) -> Self {
        Self {
            name: name.into(),
            chunk_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_next_is_strictly_increasing() {
        let g = UploadGeneration::default();
        assert!(g.next() > g);
        assert!(g.next().next() > g.next());
    }

    #[test]
    fn test_generation_display() {
        assert_eq!(UploadGeneration(3).to_string(), "gen-3");
    }

    #[test]
    fn test_staged_file_name_from_path() {
        let file = StagedFile::new("/tmp/reports/q3.pdf");
        assert_eq!(file.name, "q3.pdf");
        assert_eq!(file.path, PathBuf::from("/tmp/reports/q3.pdf"));
    }
}
