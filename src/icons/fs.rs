//! Filesystem seam for icon discovery and loading.
use std::io;
use std::path::{Path, PathBuf};

use crate::error::IconError;

/// Read-only view of the icon asset tree.
///
/// [`DiskFs`] reads the real filesystem; tests substitute a mock so the scan
/// ordering and collision policy can be checked without touching disk.
#[cfg_attr(test, mockall::automock)]
pub trait AssetFs {
    /// List the files directly under `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::DirectoryNotFound`] if `dir` does not exist and
    /// [`IconError::Read`] for any other I/O failure.
    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, IconError>;

    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Read`] if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<String, IconError>;
}

/// [`AssetFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl AssetFs for DiskFs {
    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, IconError> {
        let entries = std::fs::read_dir(dir).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                IconError::DirectoryNotFound {
                    path: dir.to_path_buf(),
                }
            } else {
                IconError::Read {
                    path: dir.to_path_buf(),
                    source,
                }
            }
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| IconError::Read {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            // Follows symlinks, so linked icon files are picked up.
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, IconError> {
        std::fs::read_to_string(path).map_err(|source| IconError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
