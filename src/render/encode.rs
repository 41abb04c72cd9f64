//! Rasterising QR symbols.
//!
//! Symbol encoding and error correction come from the `qrcode` crate; this
//! module only turns its module matrix into an RGBA bitmap.

use std::fmt;

use image::RgbaImage;
use qrcode::{Color, QrCode};

use crate::error::{QrError, Result};
use crate::types::Colour;

/// Quiet zone width in modules.
pub const DEFAULT_BORDER: u32 = 4;

/// Pixels per module when none is configured.
pub const DEFAULT_BOX_SIZE: u32 = 10;

/// Largest bitmap side the encoder will allocate.
pub const MAX_SIDE: u32 = 16_384;

/// Error-correction strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    /// ~15% recovery.
    M,
    /// ~30% recovery, needed when a logo covers the centre.
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcLevel::M => write!(f, "M"),
            EcLevel::H => write!(f, "H"),
        }
    }
}

/// Rendering parameters for [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub ec_level: EcLevel,
    /// Pixels per module edge.
    pub box_size: u32,
    /// Quiet zone in modules.
    pub border: u32,
    /// Dark module colour.
    pub fill: Colour,
    /// Light module and quiet zone colour.
    pub background: Colour,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::M,
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            fill: Colour::BLACK,
            background: Colour::WHITE,
        }
    }
}

/// Encode `payload` into a square bitmap.
///
/// The smallest symbol version that fits the payload at the requested
/// error-correction level is used. The side length is
/// `(modules + 2 * border) * box_size` pixels.
pub fn encode(payload: &str, options: &EncodeOptions) -> Result<RgbaImage> {
    if options.box_size == 0 {
        return Err(QrError::Encode {
            message: "Box size must be at least 1 pixel".to_string(),
            help: Some("Pass a positive --size".to_string()),
        });
    }

    let code = QrCode::with_error_correction_level(payload.as_bytes(), options.ec_level.into())
        .map_err(|e| QrError::Encode {
            message: format!("Failed to encode {} bytes: {}", payload.len(), e),
            help: Some("Shorten the data or drop the logo to use a lower error-correction level".to_string()),
        })?;

    let modules = code.width() as u32;
    let colors = code.to_colors();

    let scale = options.box_size;
    let side = options
        .border
        .checked_mul(2)
        .and_then(|quiet| quiet.checked_add(modules))
        .and_then(|span| span.checked_mul(scale))
        .filter(|&side| side <= MAX_SIDE)
        .ok_or_else(|| QrError::Encode {
            message: format!(
                "Image would exceed {}x{} pixels ({} modules at box size {})",
                MAX_SIDE,
                MAX_SIDE,
                modules.saturating_add(options.border.saturating_mul(2)),
                scale
            ),
            help: Some("Use a smaller --size".to_string()),
        })?;
    let dark = options.fill.into();

    let mut img = RgbaImage::from_pixel(side, side, options.background.into());

    for (i, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let mx = i as u32 % modules + options.border;
        let my = i as u32 / modules + options.border;

        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(mx * scale + sx, my * scale + sy, dark);
            }
        }
    }

    Ok(img)
}
