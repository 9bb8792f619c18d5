//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, warn};

use crate::analysis::report::{build_report, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::{check_upload, read_resume_field};

/// POST /api/v1/resumes/analyze
///
/// Accepts a `multipart/form-data` upload with the file in the `resume` field,
/// extracts its contents with the configured extractor and returns the
/// completeness report. Reports are cached by file hash when a cache is set up.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let max_bytes = state.config.max_upload_bytes;
    let document = read_resume_field(&mut multipart, max_bytes).await?;
    let document = check_upload(document, max_bytes)?;

    info!(
        file_name = document.file_name.as_deref().unwrap_or("-"),
        mime_type = %document.mime_type,
        size_bytes = document.bytes.len(),
        "Analyzing resume upload"
    );

    let content_hash = document.content_hash();

    if let Some(cache) = &state.cache {
        match cache.get(&content_hash).await {
            Ok(Some(report)) => return Ok(Json(report)),
            Ok(None) => {}
            Err(e) => warn!("Cache lookup failed, continuing uncached: {e}"),
        }
    }

    let extracted = state.extractor.extract(&document).await?;
    let report = build_report(extracted);

    info!(
        analysis_id = %report.analysis_id,
        score = report.score,
        missing = report.missing_fields.len(),
        "Resume analyzed"
    );

    if let Some(cache) = &state.cache {
        if let Err(e) = cache.put(&content_hash, &report).await {
            warn!("Failed to cache analysis {}: {e}", report.analysis_id);
        }
    }

    Ok(Json(report))
}
