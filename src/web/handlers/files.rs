//! File management handlers for the Web API.

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::Response,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::datetime::to_rfc3339;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::FiledropError;

/// A file entry as returned by `GET /api/files`.
#[derive(Debug, Serialize)]
pub struct FileResponse {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, RFC3339 UTC.
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String,
    /// Download reference for this file.
    pub url: String,
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message.
    pub message: String,
    /// Auxiliary artifact cleanup failures, if any. The primary file is
    /// gone either way.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Generate a safe Content-Disposition header value for file downloads.
///
/// Control characters are stripped to prevent header injection, quotes
/// and backslashes are replaced in the ASCII fallback, and non-ASCII
/// names additionally get an RFC 5987 `filename*` parameter.
fn content_disposition_header(filename: &str) -> String {
    let plain = filename.is_ascii()
        && !filename
            .chars()
            .any(|c| c.is_control() || c == '"' || c == '\\');
    if plain {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' | '\\' => '_',
            _ => c,
        })
        .collect();

    let encoded = urlencoding::encode(filename);

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized, encoded
    )
}

/// GET /api/files - List uploaded files.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileResponse>>, ApiError> {
    let files = state.vault.list().map_err(|e| {
        tracing::error!("Failed to list files: {}", e);
        ApiError::from(e)
    })?;

    let responses = files
        .into_iter()
        .map(|f| FileResponse {
            url: format!("/api/files/{}", urlencoding::encode(&f.name)),
            uploaded_at: to_rfc3339(f.modified),
            size: f.size,
            name: f.name,
        })
        .collect();

    Ok(Json(responses))
}

/// GET /api/files/:filename - Download a file.
///
/// The path segment is percent-decoded by the extractor before lookup.
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let (file, size) = state.vault.open(&filename).await.map_err(|e| match e {
        FiledropError::NotFound(_) => ApiError::not_found("File not found"),
        other => {
            tracing::error!("Failed to open {}: {}", filename, other);
            ApiError::internal(other.to_string())
        }
    })?;

    let body = Body::from_stream(ReaderStream::new(file));

    Response::builder()
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_header(&filename),
        )
        .header(header::CONTENT_LENGTH, size)
        .body(body)
        .map_err(|e| {
            tracing::error!("Failed to build response: {}", e);
            ApiError::internal("Failed to build response")
        })
}

/// DELETE /api/files/:filename - Delete a file and its artifacts.
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let report = state.vault.delete(&filename).map_err(|e| match e {
        FiledropError::NotFound(_) => ApiError::not_found("File not found"),
        other => {
            tracing::error!("Failed to delete {}: {}", filename, other);
            ApiError::internal(other.to_string())
        }
    })?;

    Ok(Json(DeleteResponse {
        message: "File deleted successfully".to_string(),
        warnings: report.warnings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_simple_ascii() {
        let result = content_disposition_header("document.txt");
        assert_eq!(result, "attachment; filename=\"document.txt\"");
    }

    #[test]
    fn test_content_disposition_with_spaces() {
        let result = content_disposition_header("my document.txt");
        assert_eq!(result, "attachment; filename=\"my document.txt\"");
    }

    #[test]
    fn test_content_disposition_non_ascii() {
        let result = content_disposition_header("日本語ファイル.txt");
        assert!(result.starts_with("attachment; filename=\""));
        assert!(result.contains("filename*=UTF-8''"));
    }

    #[test]
    fn test_content_disposition_header_injection() {
        let result = content_disposition_header("evil\r\nX-Injected: yes.txt");
        assert!(!result.contains('\r'));
        assert!(!result.contains('\n'));
        assert!(result.starts_with("attachment; filename="));
    }

    #[test]
    fn test_content_disposition_quote() {
        let result = content_disposition_header("a\"b.txt");
        assert!(result.contains("filename=\"a_b.txt\""));
        assert!(result.contains("%22"));
    }

    #[test]
    fn test_delete_response_hides_empty_warnings() {
        let body = serde_json::to_value(DeleteResponse {
            message: "File deleted successfully".to_string(),
            warnings: Vec::new(),
        })
        .unwrap();

        assert_eq!(body["message"], "File deleted successfully");
        assert!(body.get("warnings").is_none());
    }

    #[test]
    fn test_delete_response_keeps_warnings() {
        let body = serde_json::to_value(DeleteResponse {
            message: "File deleted successfully".to_string(),
            warnings: vec!["failed to remove x.info: permission denied".to_string()],
        })
        .unwrap();

        assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
    }
}
