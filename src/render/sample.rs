//! Logo colour sampling.
//!
//! Averages the visible, non-white pixels of a logo and maps the result onto
//! the brand palette.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::Result;
use crate::types::{Colour, Match, Palette};

use super::image_io::load_logo;

/// Logos are downscaled to this square size before sampling.
pub const SAMPLE_SIZE: u32 = 64;

/// Pixels with alpha below this are treated as transparent.
pub const MIN_ALPHA: u8 = 16;

/// Pixels with every channel above this are treated as backdrop white.
pub const WHITE_CUTOFF: u8 = 245;

/// Colours chosen for a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoStyle {
    /// Raw average of the surviving pixels (or the palette fallback).
    pub sampled: Colour,
    /// Nearest candidate entry, used as the fill colour.
    pub fill: Match,
    /// Surface colour paired with the fill.
    pub background: Colour,
}

/// Average colour of the visible, non-white pixels of `logo`.
///
/// Returns `None` when no pixel survives the filter.
pub fn average_visible(logo: &RgbaImage) -> Option<Colour> {
    if logo.width() == 0 || logo.height() == 0 {
        return None;
    }

    let small = imageops::resize(logo, SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Lanczos3);

    let mut sum = [0u64; 3];
    let mut count = 0u64;

    for px in small.pixels() {
        let [r, g, b, a] = px.0;
        if a < MIN_ALPHA {
            continue;
        }
        if r > WHITE_CUTOFF && g > WHITE_CUTOFF && b > WHITE_CUTOFF {
            continue;
        }
        sum[0] += r as u64;
        sum[1] += g as u64;
        sum[2] += b as u64;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(Colour::rgb(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    ))
}

/// Average logo colour, or the palette's fallback when nothing survives.
pub fn sample_average(logo: &RgbaImage, palette: &Palette) -> Colour {
    average_visible(logo).unwrap_or(palette.fallback().colour)
}

/// Pick fill and background colours for an already-decoded logo.
pub fn style_for_logo(logo: &RgbaImage, palette: &Palette) -> LogoStyle {
    let sampled = sample_average(logo, palette);
    LogoStyle {
        sampled,
        fill: palette.nearest(sampled),
        background: palette.background().colour,
    }
}

/// Load a logo from disk and pick colours for it.
///
/// The decoded image is dropped before returning. Load failures come back as
/// [`crate::QrError::Logo`].
pub fn style_for_logo_file(path: &Path, palette: &Palette) -> Result<LogoStyle> {
    let logo = load_logo(path)?;
    Ok(style_for_logo(&logo, palette))
}
