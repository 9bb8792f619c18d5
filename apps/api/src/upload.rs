//! Résumé upload intake: multipart field extraction and request checks.

use axum::{extract::Multipart, http::StatusCode};
use bytes::Bytes;
use sha2::{Digest, Sha256};

use crate::errors::AppError;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

pub const PERMITTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// An uploaded résumé, as received.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: Option<String>,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl ResumeDocument {
    /// Lowercase hex SHA-256 of the file bytes.
    pub fn content_hash(&self) -> String {
        format!("{:x}", Sha256::digest(&self.bytes))
    }
}

/// Reads the `resume` field from a multipart body, skipping any other fields.
///
/// A body cut off by the router's size limit is reported as too large, unless
/// the resume part already declared an unsupported type.
pub async fn read_resume_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<Option<ResumeDocument>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::FileTooLarge {
                limit_bytes: max_bytes,
            }
        } else {
            AppError::Validation(format!("Invalid multipart body: {e}"))
        }
    })? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let declared = field.content_type().map(String::from);
        let mime_type = resolve_mime_type(declared.as_deref(), file_name.as_deref());
        let bytes = field.bytes().await.map_err(|e| {
            if e.status() != StatusCode::PAYLOAD_TOO_LARGE {
                AppError::Validation(format!("Invalid resume file: {e}"))
            } else if !PERMITTED_MIME_TYPES.contains(&mime_type.as_str()) {
                AppError::FileTypeNotSupported(mime_type.clone())
            } else {
                AppError::FileTooLarge {
                    limit_bytes: max_bytes,
                }
            }
        })?;

        return Ok(Some(ResumeDocument {
            file_name,
            mime_type,
            bytes,
        }));
    }
    Ok(None)
}

/// Checks presence, type and size of an upload, in that order of precedence.
pub fn check_upload(
    document: Option<ResumeDocument>,
    max_bytes: usize,
) -> Result<ResumeDocument, AppError> {
    let document = document.ok_or(AppError::FileNotFound)?;

    if !PERMITTED_MIME_TYPES.contains(&document.mime_type.as_str()) {
        return Err(AppError::FileTypeNotSupported(document.mime_type));
    }

    if document.bytes.len() > max_bytes {
        return Err(AppError::FileTooLarge {
            limit_bytes: max_bytes,
        });
    }

    Ok(document)
}

/// Normalizes the declared content type, falling back to the file extension
/// when the client sent none or a generic binary type.
fn resolve_mime_type(declared: Option<&str>, file_name: Option<&str>) -> String {
    let essence = declared
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

    if let Some(essence) = essence {
        return essence;
    }

    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf".to_string(),
        Some("docx") => PERMITTED_MIME_TYPES[1].to_string(),
        Some("txt") => "text/plain".to_string(),
        _ => declared.unwrap_or_default().to_string(),
    }
}
