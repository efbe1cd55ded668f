//! Resumable upload engine boundary.
//!
//! The chunked-upload wire protocol (creation, offset negotiation,
//! patch-append, completion, expiry) is implemented by an external engine.
//! This crate only configures it and routes requests to it; the trait
//! below is the seam where an engine implementation plugs in.

use std::path::PathBuf;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::Request;
use axum::response::Response;
use tower::BoxError;

use crate::store::resolve_upload_name;

/// Naming hook handed to the engine: maps an optional `Upload-Metadata`
/// header value to the on-disk name for a new upload.
pub type NamingFn = Arc<dyn Fn(Option<&str>) -> String + Send + Sync>;

/// Configuration handed to an upload engine implementation.
#[derive(Clone)]
pub struct EngineConfig {
    /// Directory the engine writes primary files and bookkeeping
    /// artifacts into. Shared with the listing and deletion side.
    pub dir: PathBuf,
    /// Naming resolver for new uploads.
    pub naming: NamingFn,
}

impl EngineConfig {
    /// Create an engine configuration over the given upload directory,
    /// wired to the default naming resolver.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            naming: Arc::new(resolve_upload_name),
        }
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

/// External resumable-upload engine.
///
/// The gateway hands every request on the upload path prefix to
/// [`UploadEngine::handle`] untouched. The engine returns:
///
/// - `Ok(Some(response))` when it recognized and handled the request,
/// - `Ok(None)` when the request is not a valid protocol operation
///   (the gateway answers 404),
/// - `Err(_)` on unexpected failure (the gateway answers 500 with the
///   failure's message).
#[async_trait]
pub trait UploadEngine: Send + Sync {
    /// Handle a raw HTTP request on the upload path.
    async fn handle(&self, req: Request) -> Result<Option<Response>, BoxError>;
}
