//! Upload artifact and metadata lifecycle.
//!
//! This module owns the on-disk side of the upload system: naming new
//! uploads, classifying directory entries into user-visible files versus
//! engine bookkeeping, listing, and cross-artifact deletion.

pub mod classify;
pub mod naming;
pub mod vault;

pub use classify::{classify, ArtifactKind, PROGRESS_SUFFIX, SIDECAR_SUFFIX};
pub use naming::{parse_upload_metadata, resolve_upload_name};
pub use vault::{DeleteReport, StoredFile, UploadVault};
