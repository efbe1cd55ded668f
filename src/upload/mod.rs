//! Upload engine integration.

pub mod engine;

pub use engine::{EngineConfig, NamingFn, UploadEngine};
