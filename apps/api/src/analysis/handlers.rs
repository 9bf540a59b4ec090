//! Axum route handlers for the extraction and analysis endpoints.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::analyze_resume;
use crate::errors::AppError;
use crate::extraction::{extract_resume_text, ExtractionMethod};
use crate::state::AppState;
use crate::upload::looks_like_pdf;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub method: ExtractionMethod,
    pub chars: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
    pub extraction_method: ExtractionMethod,
}

/// A parsed multipart upload: resume bytes plus the optional JD text.
struct UploadForm {
    resume: Vec<u8>,
    job_description: Option<String>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut resume: Option<Vec<u8>> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

                if bytes.is_empty() {
                    return Err(AppError::Validation("Uploaded resume is empty".to_string()));
                }
                if !looks_like_pdf(filename.as_deref(), content_type.as_deref(), &bytes) {
                    return Err(AppError::Validation(
                        "Resume must be a PDF document".to_string(),
                    ));
                }
                resume = Some(bytes.to_vec());
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read field: {e}")))?;
                job_description = Some(text);
            }
            _ => {} // unknown fields are ignored
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;

    Ok(UploadForm {
        resume,
        job_description,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/extract
///
/// Saves the upload into the shared slot and returns the extracted text.
/// Lets the UI show what was read before the user hits Analyze.
pub async fn handle_extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let path = state
        .uploads
        .save(&form.resume)
        .await
        .map_err(|e| AppError::Extraction(format!("{e:#}")))?;

    let extracted = extract_resume_text(path, state.ocr.as_ref()).await?;

    Ok(Json(ExtractResponse {
        chars: extracted.text.chars().count(),
        text: extracted.text,
        method: extracted.method,
    }))
}

/// POST /api/v1/analyze
///
/// Full pipeline: save upload → extract text → build prompt → one LLM call.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let path = state
        .uploads
        .save(&form.resume)
        .await
        .map_err(|e| AppError::Extraction(format!("{e:#}")))?;

    let extracted = extract_resume_text(path, state.ocr.as_ref()).await?;
    info!(
        "Extracted {} chars via {:?}",
        extracted.text.chars().count(),
        extracted.method
    );

    let analysis =
        analyze_resume(&extracted.text, form.job_description.as_deref(), &state.llm).await?;

    Ok(Json(AnalyzeResponse {
        analysis,
        extraction_method: extracted.method,
    }))
}
