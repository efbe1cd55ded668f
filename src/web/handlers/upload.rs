//! Upload gateway handler.
//!
//! Every request on the upload path prefix is handed untouched to the
//! external resumable-upload engine. This handler is pass-through glue;
//! the protocol state machine lives entirely in the engine.

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Any method on /uploads* - Delegate to the upload engine.
///
/// Requests the engine does not recognize as protocol operations (it
/// produced no response), or requests arriving while no engine is wired
/// in, are answered with a generic 404. Engine failures become a 500
/// carrying the failure's message.
pub async fn upload_gateway(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let Some(engine) = state.engine.as_ref() else {
        return ApiError::not_found("Not found").into_response();
    };

    match engine.handle(req).await {
        Ok(Some(response)) => response,
        Ok(None) => ApiError::not_found("Not found").into_response(),
        Err(e) => {
            tracing::error!("Upload engine failure: {}", e);
            ApiError::internal(e.to_string()).into_response()
        }
    }
}
