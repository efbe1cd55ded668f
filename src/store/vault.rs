//! Upload directory access.
//!
//! This module provides the on-disk view of the upload directory:
//! - listing the user-visible files (bookkeeping artifacts filtered out)
//! - opening a file for download
//! - deleting a file together with its bookkeeping artifacts
//!
//! The directory itself is the single source of truth. Nothing is cached
//! between calls, so concurrent uploads and deletes interleave with
//! listings without ever producing a corrupted view, only an eventually
//! consistent one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::store::classify::{classify, ArtifactKind, PROGRESS_SUFFIX, SIDECAR_SUFFIX};
use crate::{FiledropError, Result};

/// A user-visible uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// File name, unique within the upload directory.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: SystemTime,
}

/// Outcome of a delete operation.
///
/// The primary file is always gone when a report is returned. `warnings`
/// carries any unexpected failures while removing auxiliary artifacts;
/// the delete as a whole still counts as successful, but callers must be
/// able to tell that cleanup was not complete.
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Human-readable descriptions of auxiliary cleanup failures.
    pub warnings: Vec<String>,
}

/// Access to the shared upload directory.
///
/// The directory holds, per logical file, its primary bytes plus zero or
/// one `.info` progress artifact and zero or one `.json` sidecar metadata
/// artifact, all written by the external upload engine.
#[derive(Debug, Clone)]
pub struct UploadVault {
    /// The upload directory.
    dir: PathBuf,
}

impl UploadVault {
    /// Create a vault over the given directory.
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    /// Get the upload directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the full path for a file name.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// List the user-visible files in the upload directory.
    ///
    /// Progress artifacts and sidecar metadata artifacts are filtered out
    /// via [`classify`]. Ordering follows directory enumeration order and
    /// is not guaranteed sorted. An entry that disappears between
    /// enumeration and stat (a racing delete) is silently skipped; a
    /// directory that cannot be read at all fails the whole listing with
    /// [`FiledropError::StorageUnavailable`].
    pub fn list(&self) -> Result<Vec<StoredFile>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            FiledropError::StorageUnavailable(format!("cannot read {}: {e}", self.dir.display()))
        })?;

        let mut files = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| {
                FiledropError::StorageUnavailable(format!(
                    "cannot read {}: {e}",
                    self.dir.display()
                ))
            })?;

            // Non-UTF-8 names cannot be addressed through the API; skip them.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            if classify(&self.dir, &name) != Some(ArtifactKind::LogicalFile) {
                continue;
            }

            let metadata = match fs::metadata(entry.path()) {
                Ok(m) => m,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // Deleted between enumeration and stat.
                    continue;
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry {}: {}", name, e);
                    continue;
                }
            };

            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

            files.push(StoredFile {
                name,
                size: metadata.len(),
                modified,
            });
        }

        Ok(files)
    }

    /// Open a file for download.
    ///
    /// Returns the opened file handle and its size in bytes. Fails with
    /// [`FiledropError::NotFound`] when the name does not resolve to a
    /// regular file.
    pub async fn open(&self, name: &str) -> Result<(tokio::fs::File, u64)> {
        let path = self.file_path(name);

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FiledropError::NotFound(format!("File: {name}")));
            }
            Err(e) => return Err(e.into()),
        };

        if !metadata.is_file() {
            return Err(FiledropError::NotFound(format!("File: {name}")));
        }

        let file = match tokio::fs::File::open(&path).await {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // Deleted between stat and open.
                return Err(FiledropError::NotFound(format!("File: {name}")));
            }
            Err(e) => return Err(e.into()),
        };

        Ok((file, metadata.len()))
    }

    /// Delete a logical file and its bookkeeping artifacts.
    ///
    /// The primary file must exist as a regular file, otherwise the whole
    /// operation fails with [`FiledropError::NotFound`] and nothing is
    /// touched. After the primary is removed, the `<name>.info` and
    /// `<name>.json` artifacts are removed best-effort: absence is fine,
    /// while an unexpected failure is recorded as a warning in the report
    /// rather than failing the delete.
    ///
    /// The three removals are not atomic; a crash in between can leave an
    /// orphaned auxiliary artifact behind. The next upload of the same
    /// name overwrites it, and listings never show it.
    pub fn delete(&self, name: &str) -> Result<DeleteReport> {
        let primary = self.file_path(name);

        match fs::metadata(&primary) {
            Ok(m) if m.is_file() => {}
            Ok(_) => return Err(FiledropError::NotFound(format!("File: {name}"))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FiledropError::NotFound(format!("File: {name}")));
            }
            Err(e) => return Err(e.into()),
        }

        fs::remove_file(&primary)?;

        let mut report = DeleteReport::default();

        for suffix in [PROGRESS_SUFFIX, SIDECAR_SUFFIX] {
            let artifact = format!("{name}{suffix}");
            match fs::remove_file(self.file_path(&artifact)) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!("Failed to remove artifact {}: {}", artifact, e);
                    report
                        .warnings
                        .push(format!("failed to remove {artifact}: {e}"));
                }
            }
        }

        Ok(report)
    }
}
