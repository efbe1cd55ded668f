//! filedrop - resumable file upload server.
//!
//! Exposes an HTTP surface for uploading large files in resumable chunks
//! and managing the resulting files (list, download, delete). The chunked
//! wire protocol itself is delegated to an external upload engine; this
//! crate owns the artifact and metadata lifecycle around it.

pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod store;
pub mod upload;
pub mod web;

pub use config::Config;
pub use error::{FiledropError, Result};
pub use store::{
    classify, parse_upload_metadata, resolve_upload_name, ArtifactKind, DeleteReport, StoredFile,
    UploadVault, PROGRESS_SUFFIX, SIDECAR_SUFFIX,
};
pub use upload::{EngineConfig, UploadEngine};
pub use web::WebServer;
