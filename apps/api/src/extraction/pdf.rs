//! Direct tier — the PDF's embedded text layer via `pdf-extract`.

use std::path::Path;

use anyhow::{Context, Result};

/// Extracts the embedded text layer. Parsing is CPU-bound, so it runs on
/// the blocking pool rather than the async executor.
pub async fn extract_text_layer(path: &Path) -> Result<String> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text(&path)
            .with_context(|| format!("pdf-extract could not read {}", path.display()))
    })
    .await
    .context("PDF extraction task panicked")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let err = extract_text_layer(Path::new("/nonexistent/resume.pdf"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/resume.pdf"));
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        tokio::fs::write(&path, b"plain text, no PDF structure")
            .await
            .unwrap();
        assert!(extract_text_layer(&path).await.is_err());
    }
}
