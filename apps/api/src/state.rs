use std::sync::Arc;

use crate::config::Config;
use crate::extraction::OcrEngine;
use crate::llm_client::LlmClient;
use crate::upload::UploadSlot;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// The single shared upload slot, overwritten on every upload.
    pub uploads: Arc<UploadSlot>,
    /// Pluggable OCR engine. Default: the tesseract CLI.
    pub ocr: Arc<dyn OcrEngine>,
    pub config: Config,
}
