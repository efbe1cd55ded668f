//! Directory entry classification.
//!
//! The upload engine persists two kinds of bookkeeping artifacts next to
//! each uploaded file: a progress artifact (`<name>.info`) that exists for
//! the lifetime of an upload, and an optional sidecar metadata artifact
//! (`<name>.json`). Listing and deletion both need to tell those apart
//! from real user-visible files.
//!
//! Classification is recomputed from the current directory contents on
//! every call. There is no cached upload-state table to keep in sync, so
//! a sidecar whose primary file disappears is reclassified as a logical
//! file on the very next scan.

use std::path::Path;

/// Suffix of the progress artifact the upload engine keeps per upload.
pub const PROGRESS_SUFFIX: &str = ".info";

/// Suffix of the optional sidecar metadata artifact.
pub const SIDECAR_SUFFIX: &str = ".json";

/// The role a directory entry plays in the upload directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A completed, user-visible uploaded file.
    LogicalFile,
    /// Upload progress bookkeeping (`.info`), never shown to API clients.
    ProgressArtifact,
    /// Extra upload metadata (`.json`) belonging to an existing primary file.
    SidecarMetadataArtifact,
}

/// Classify a single entry of the upload directory.
///
/// Returns `None` for entries that are not regular files (directories,
/// sockets, ...) which are excluded from all further processing.
///
/// A `.json` entry only counts as a sidecar artifact while a same-named
/// primary file exists as a regular file. Without that primary it is
/// treated as a logical file in its own right: it may be a user upload
/// that happens to end in `.json`, or an orphan from an upload that never
/// finished, and neither must be hidden or destroyed by misclassification.
pub fn classify(dir: &Path, name: &str) -> Option<ArtifactKind> {
    if !dir.join(name).is_file() {
        return None;
    }

    if name.ends_with(PROGRESS_SUFFIX) {
        return Some(ArtifactKind::ProgressArtifact);
    }

    if let Some(primary) = name.strip_suffix(SIDECAR_SUFFIX) {
        if !primary.is_empty() && dir.join(primary).is_file() {
            return Some(ArtifactKind::SidecarMetadataArtifact);
        }
        return Some(ArtifactKind::LogicalFile);
    }

    Some(ArtifactKind::LogicalFile)
}
