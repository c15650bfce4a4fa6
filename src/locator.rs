//! Resource Lookup
//!
//! Resolves a logical source name (identifier + extension + subdirectory)
//! to a playable location, or reports its absence. The mixer never touches
//! the filesystem directly; it goes through [`ResourceLocator`] so the
//! library layout stays a deployment concern.

use std::path::{Path, PathBuf};

/// Lookup service for audio sources.
pub trait ResourceLocator: Send {
    /// Resolve `(identifier, extension, subdirectory)` to a playable
    /// location, or `None` if the source does not exist.
    fn locate(&self, identifier: &str, extension: &str, subdirectory: &str) -> Option<PathBuf>;
}

/// Filesystem-backed locator rooted at a sound library directory.
///
/// Resolves to `root/subdirectory/identifier.extension` and answers `Some`
/// only when that file exists.
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    root: PathBuf,
}

impl DirectoryLocator {
    /// Create a locator rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DirectoryLocator {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The library root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLocator for DirectoryLocator {
    fn locate(&self, identifier: &str, extension: &str, subdirectory: &str) -> Option<PathBuf> {
        let path = self
            .root
            .join(subdirectory)
            .join(format!("{}.{}", identifier, extension));
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }
}
