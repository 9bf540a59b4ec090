//! Two-tier resume text extraction.
//!
//! Tier 1 reads the PDF's embedded text layer (`pdf-extract`). Tier 2
//! rasterizes pages and runs OCR, and is entered only when tier 1 errors
//! or yields whitespace-only text. There is no per-page error isolation
//! and no retry: the fallback is the whole recovery story.

pub mod ocr;
pub mod pdf;

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;

pub use ocr::{OcrEngine, TesseractCliEngine};

/// Which tier produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    Direct,
    Ocr,
}

#[derive(Debug)]
pub struct Extracted {
    pub text: String,
    pub method: ExtractionMethod,
}

/// Extracts resume text from the uploaded PDF, falling back to OCR when
/// the text layer is missing or empty. Both tiers coming up empty is an
/// unprocessable upload, not a server fault.
pub async fn extract_resume_text(
    path: &Path,
    ocr: &dyn OcrEngine,
) -> Result<Extracted, AppError> {
    match pdf::extract_text_layer(path).await {
        Ok(text) if has_extractable_text(&text) => {
            return Ok(Extracted {
                text: text.trim().to_string(),
                method: ExtractionMethod::Direct,
            });
        }
        Ok(_) => info!("Text layer is empty; falling back to OCR"),
        Err(e) => warn!("Direct text extraction failed: {e:#}; falling back to OCR"),
    }

    let text = match ocr.recognize_pdf(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("OCR failed: {e:#}");
            String::new()
        }
    };

    if !has_extractable_text(&text) {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the uploaded PDF".to_string(),
        ));
    }

    Ok(Extracted {
        text: text.trim().to_string(),
        method: ExtractionMethod::Ocr,
    })
}

/// True when extraction produced something beyond whitespace.
fn has_extractable_text(text: &str) -> bool {
    !text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Test double that records whether the OCR tier was entered.
    struct StubOcr {
        text: Option<String>,
        called: AtomicBool,
    }

    impl StubOcr {
        fn returning(text: &str) -> Self {
            Self {
                text: Some(text.to_string()),
                called: AtomicBool::new(false),
            }
        }

        fn failing() -> Self {
            Self {
                text: None,
                called: AtomicBool::new(false),
            }
        }

        fn was_called(&self) -> bool {
            self.called.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OcrEngine for StubOcr {
        async fn recognize_pdf(&self, _path: &Path) -> Result<String> {
            self.called.store(true, Ordering::SeqCst);
            match &self.text {
                Some(text) => Ok(text.clone()),
                None => bail!("ocr unavailable"),
            }
        }
    }

    #[test]
    fn test_whitespace_only_text_is_not_extractable() {
        assert!(!has_extractable_text(""));
        assert!(!has_extractable_text("  \n\t  "));
        assert!(has_extractable_text("  Jane Doe\nSoftware Engineer  "));
    }

    #[tokio::test]
    async fn test_unreadable_pdf_triggers_ocr_fallback() {
        // Not a parseable PDF, so the direct tier errors and tier 2 runs.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        tokio::fs::write(&path, b"%PDF-1.4 truncated garbage")
            .await
            .unwrap();

        let ocr = StubOcr::returning("Jane Doe\nData Analyst");
        let extracted = extract_resume_text(&path, &ocr).await.unwrap();

        assert!(ocr.was_called());
        assert_eq!(extracted.method, ExtractionMethod::Ocr);
        assert_eq!(extracted.text, "Jane Doe\nData Analyst");
    }

    #[tokio::test]
    async fn test_both_tiers_empty_is_unprocessable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.pdf");
        tokio::fs::write(&path, b"not a pdf at all").await.unwrap();

        let ocr = StubOcr::returning("   \n ");
        let err = extract_resume_text(&path, &ocr).await.unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_ocr_failure_is_unprocessable_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        tokio::fs::write(&path, b"garbage").await.unwrap();

        let ocr = StubOcr::failing();
        let err = extract_resume_text(&path, &ocr).await.unwrap_err();
        assert!(ocr.was_called());
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
