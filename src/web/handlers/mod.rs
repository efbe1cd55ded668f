//! API handlers for the Web API.

pub mod files;
pub mod upload;

pub use files::*;
pub use upload::*;

use std::sync::Arc;

use crate::store::UploadVault;
use crate::upload::UploadEngine;

/// Shared application state.
pub struct AppState {
    /// The upload directory.
    pub vault: UploadVault,
    /// The external resumable-upload engine, when one is wired in.
    pub engine: Option<Arc<dyn UploadEngine>>,
}

impl AppState {
    /// Create application state over the given vault, without an engine.
    pub fn new(vault: UploadVault) -> Self {
        Self {
            vault,
            engine: None,
        }
    }

    /// Attach an upload engine.
    pub fn with_engine(mut self, engine: Arc<dyn UploadEngine>) -> Self {
        self.engine = Some(engine);
        self
    }
}
