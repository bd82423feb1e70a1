// SPDX-License-Identifier: MPL-2.0
//! Gallery image loading and decoding (WebP, PNG, JPEG, GIF, BMP).

use super::source::{fetch_bytes, AssetSource};
use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded carousel photo, ready to display.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl GalleryImage {
    /// Creates a new `GalleryImage` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width over height, or 1.0 for a degenerate image.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Decodes encoded image bytes.
///
/// # Errors
///
/// Returns [`crate::error::Error::Asset`] if the format is invalid or
/// unsupported.
pub fn decode_gallery_image(bytes: &[u8]) -> Result<GalleryImage> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(GalleryImage::from_rgba(width, height, pixels))
}

/// Fetches and decodes one gallery image.
///
/// Decoding runs on the blocking pool so large photos do not stall the
/// runtime.
///
/// # Errors
///
/// Returns an error if fetching or decoding fails.
pub async fn load_gallery_image(source: AssetSource) -> Result<GalleryImage> {
    let bytes = fetch_bytes(&source).await?;
    let image = tokio::task::spawn_blocking(move || decode_gallery_image(&bytes))
        .await
        .map_err(|e| crate::error::Error::Asset(e.to_string()))??;
    tracing::debug!(
        source = %source,
        width = image.width,
        height = image.height,
        "gallery image loaded"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([244, 63, 94, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode png");
        bytes
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let image = decode_gallery_image(&png_bytes(4, 2)).expect("png should decode");
        assert_eq!(image.width, 4);
        assert_eq!(image.height, 2);
        assert!((image.aspect_ratio() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn decode_invalid_bytes_returns_asset_error() {
        match decode_gallery_image(b"not an image") {
            Err(Error::Asset(message)) => assert!(!message.is_empty()),
            other => panic!("expected Asset error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_gallery_image_from_local_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("photo.png");
        std::fs::write(&path, png_bytes(3, 3)).expect("failed to write png");

        let image = load_gallery_image(AssetSource::Path(path))
            .await
            .expect("local png should load");
        assert_eq!((image.width, image.height), (3, 3));
    }

    #[tokio::test]
    async fn load_gallery_image_missing_file_fails() {
        let result = load_gallery_image(AssetSource::parse("/nonexistent/photo.webp")).await;
        assert!(result.is_err());
    }
}
