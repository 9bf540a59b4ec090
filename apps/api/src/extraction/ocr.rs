//! OCR tier — rasterize with poppler's `pdftoppm`, recognize with the
//! `tesseract` CLI.
//!
//! Both tools run as subprocesses, so a missing binary surfaces as a
//! per-request extraction error rather than a build or startup failure.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

const RASTER_DPI: u32 = 300;
const OCR_LANGUAGE: &str = "eng";
const PAGE_PREFIX: &str = "page";

/// OCR backend seam. Carried in `AppState` as `Arc<dyn OcrEngine>` so the
/// extraction pipeline never names a concrete engine.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognizes text across all pages of a PDF, in page order.
    async fn recognize_pdf(&self, path: &Path) -> Result<String>;
}

/// Default engine: `pdftoppm` + `tesseract` binaries.
#[derive(Debug, Default)]
pub struct TesseractCliEngine;

#[async_trait]
impl OcrEngine for TesseractCliEngine {
    async fn recognize_pdf(&self, path: &Path) -> Result<String> {
        let raster_dir = tempfile::tempdir().context("Failed to create raster temp directory")?;
        let pages = rasterize_pages(path, raster_dir.path()).await?;
        debug!("Rasterized {} page(s) for OCR", pages.len());

        let mut text = String::new();
        for page in &pages {
            let page_text = recognize_page(page).await?;
            text.push_str(&page_text);
            text.push('\n');
        }
        Ok(text)
    }
}

/// Renders every page of the PDF to a PNG in `out_dir` and returns the
/// image paths in page order.
async fn rasterize_pages(pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let output = Command::new("pdftoppm")
        .args(pdftoppm_args(RASTER_DPI))
        .arg(pdf)
        .arg(out_dir.join(PAGE_PREFIX))
        .output()
        .await
        .context("Failed to spawn pdftoppm; ensure poppler is installed")?;

    if !output.status.success() {
        bail!(
            "pdftoppm exited with status {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    // pdftoppm zero-pads page numbers, so lexicographic order is page order.
    let mut pages = Vec::new();
    let mut entries = tokio::fs::read_dir(out_dir)
        .await
        .context("Failed to list rasterized pages")?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map(|ext| ext == "png").unwrap_or(false) {
            pages.push(path);
        }
    }
    pages.sort();

    if pages.is_empty() {
        bail!("pdftoppm produced no page images");
    }
    Ok(pages)
}

fn pdftoppm_args(dpi: u32) -> Vec<String> {
    vec!["-png".to_string(), "-r".to_string(), dpi.to_string()]
}

/// Runs tesseract over one page image, reading recognized text from stdout.
async fn recognize_page(image: &Path) -> Result<String> {
    let output = Command::new("tesseract")
        .arg(image)
        .arg("stdout")
        .args(["-l", OCR_LANGUAGE])
        .output()
        .await
        .context("Failed to spawn tesseract; ensure it is installed")?;

    if !output.status.success() {
        bail!(
            "tesseract exited with status {} on {}: {}",
            output.status,
            image.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8(output.stdout).context("tesseract output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdftoppm_args_request_png_at_dpi() {
        let args = pdftoppm_args(300);
        assert_eq!(args, vec!["-png", "-r", "300"]);
    }

    #[tokio::test]
    async fn test_rasterize_rejects_missing_pdf() {
        // Whether pdftoppm is absent or the input is, this must be an error,
        // never a silent empty page list.
        let dir = tempfile::tempdir().unwrap();
        let result = rasterize_pages(Path::new("/nonexistent/input.pdf"), dir.path()).await;
        assert!(result.is_err());
    }
}
