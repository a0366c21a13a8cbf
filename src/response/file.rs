//! File output for generated images

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::client::ImagePayload;
use crate::error::Result;

/// Writes finished images to an output directory with filenames derived
/// from the prompt.
pub struct ImageSaver {
    output_dir: PathBuf,
}

impl ImageSaver {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Ensure the output directory exists
    pub async fn ensure_output_dir(&self) -> Result<()> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).await?;
            debug!(path = ?self.output_dir, "Created output directory");
        }
        Ok(())
    }

    /// Save one slot's image; the filename combines the prompt slug and the
    /// slot's 1-based position.
    pub async fn save(&self, payload: &ImagePayload, prompt: &str, index: usize) -> Result<PathBuf> {
        self.ensure_output_dir().await?;

        let data = payload.bytes()?;
        let format = detect_image_format(&data).unwrap_or("png");
        let filename = format!("{}-{}.{}", slugify(prompt), index + 1, format);
        let file_path = self.output_dir.join(filename);

        fs::write(&file_path, &data).await?;
        debug!(path = ?file_path, size = data.len(), "Saved image file");

        Ok(file_path)
    }
}

/// Reduce a prompt to a filesystem-safe slug
pub fn slugify(prompt: &str) -> String {
    let slug: String = prompt
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();
    let slug = slug.split_whitespace().collect::<Vec<_>>().join("-");

    if slug.is_empty() {
        "generated-image".to_string()
    } else {
        slug
    }
}

/// Detect image format from binary data using magic bytes
fn detect_image_format(data: &[u8]) -> Option<&'static str> {
    if data.len() < 8 {
        return None;
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("png");
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("jpg");
    }

    // WebP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("webp");
    }

    None
}
