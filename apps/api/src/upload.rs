//! The single shared upload slot.
//!
//! Every upload lands at the same path inside a process-owned temp
//! directory and truncates whatever the previous upload left there. No
//! identity tracking and no locking: concurrent uploads race on the path.
//! The directory is removed when the process exits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

const UPLOAD_FILE_NAME: &str = "uploaded_resume.pdf";

pub struct UploadSlot {
    // Held for its Drop impl, which deletes the directory on shutdown.
    _dir: TempDir,
    path: PathBuf,
}

impl UploadSlot {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("Failed to create upload temp directory")?;
        let path = dir.path().join(UPLOAD_FILE_NAME);
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the uploaded bytes to the slot, replacing any previous upload.
    pub async fn save(&self, bytes: &[u8]) -> Result<&Path> {
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("Failed to write upload to {}", self.path.display()))?;
        Ok(&self.path)
    }
}

/// Returns true if the payload looks like a PDF:
/// - magic bytes `%PDF-`, or
/// - Content-Type containing `application/pdf` (case-insensitive), or
/// - a `.pdf` filename.
pub fn looks_like_pdf(filename: Option<&str>, content_type: Option<&str>, head: &[u8]) -> bool {
    if head.starts_with(b"%PDF-") {
        return true;
    }
    if content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/pdf"))
        .unwrap_or(false)
    {
        return true;
    }
    filename
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_second_save_overwrites_first() {
        let slot = UploadSlot::new().unwrap();

        let first = slot.save(b"%PDF-1.4 first upload").await.unwrap();
        let second = slot.save(b"%PDF-1.7 second").await.unwrap();
        assert_eq!(first, second); // same slot path, no identity tracking

        let on_disk = tokio::fs::read(slot.path()).await.unwrap();
        assert_eq!(on_disk, b"%PDF-1.7 second");
    }

    #[test]
    fn test_magic_bytes_win_over_filename() {
        assert!(looks_like_pdf(Some("resume.docx"), None, b"%PDF-1.4"));
    }

    #[test]
    fn test_content_type_accepted() {
        assert!(looks_like_pdf(None, Some("Application/PDF"), b""));
    }

    #[test]
    fn test_pdf_extension_accepted_case_insensitive() {
        assert!(looks_like_pdf(Some("Resume.PDF"), None, b""));
    }

    #[test]
    fn test_non_pdf_rejected() {
        assert!(!looks_like_pdf(
            Some("resume.docx"),
            Some("application/msword"),
            b"PK\x03\x04"
        ));
    }
}
