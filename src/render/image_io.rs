//! Image decoding and encoding.

use std::path::Path;

use image::{imageops, ImageFormat, RgbaImage};

use crate::error::{QrError, Result};
use crate::types::Colour;

/// Decode a logo into RGBA8.
///
/// Failures are reported as [`QrError::Logo`] so callers can degrade
/// instead of aborting.
pub fn load_logo(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(QrError::Logo {
            path: path.to_path_buf(),
            message: "file does not exist".to_string(),
        });
    }

    let img = image::open(path).map_err(|e| QrError::Logo {
        path: path.to_path_buf(),
        message: format!("failed to decode image: {}", e),
    })?;

    Ok(img.to_rgba8())
}

/// Write an image in the format implied by the path's extension.
///
/// Formats without an alpha channel are flattened onto white first.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|e| QrError::Io {
        path: path.to_path_buf(),
        message: format!("Unsupported output format: {}", e),
        help: Some("Use an extension such as .png, .jpg, .webp or .bmp".to_string()),
    })?;

    let saved = match format {
        ImageFormat::Jpeg => {
            let mut flat = RgbaImage::from_pixel(img.width(), img.height(), Colour::WHITE.into());
            imageops::overlay(&mut flat, img, 0, 0);
            image::DynamicImage::ImageRgba8(flat)
                .to_rgb8()
                .save_with_format(path, format)
        }
        _ => img.save_with_format(path, format),
    };

    saved.map_err(|e| QrError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
        help: None,
    })
}
