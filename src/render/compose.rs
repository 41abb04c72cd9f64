//! Logo inlay and framing.
//!
//! All geometry is derived from the size of the image being composed, so the
//! same layout holds for every box size.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Pixel, Rgba, RgbaImage};

use crate::types::Colour;
use crate::warning::{Outcome, Warning};

use super::image_io::load_logo;

/// Logo container edge as a fraction of the QR width.
pub const LOGO_BOX_RATIO: f32 = 0.26;

/// Container corner radius as a fraction of the container edge.
pub const LOGO_CORNER_RATIO: f32 = 0.16;

/// Inner margin on each side as a fraction of the container edge.
pub const LOGO_MARGIN_RATIO: f32 = 0.06;

/// Frame padding on each side as a fraction of the input width.
pub const FRAME_PADDING_RATIO: f32 = 0.03;

/// Frame corner radius as a fraction of the smaller canvas dimension.
pub const FRAME_CORNER_RATIO: f32 = 0.10;

/// Fill colour of the logo container.
pub const CONTAINER_COLOUR: Colour = Colour::WHITE;

/// A placed rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LayoutBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width` x `height` box centred inside a `parent_w` x `parent_h` area.
    pub fn centred(parent_w: u32, parent_h: u32, width: u32, height: u32) -> Self {
        Self::new(
            parent_w.saturating_sub(width) / 2,
            parent_h.saturating_sub(height) / 2,
            width,
            height,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

fn ratio_of(length: u32, ratio: f32) -> u32 {
    (length as f32 * ratio).round() as u32
}

/// The square container a logo is placed in.
pub fn logo_container(qr_width: u32, qr_height: u32) -> LayoutBox {
    let size = ratio_of(qr_width, LOGO_BOX_RATIO).min(qr_height);
    LayoutBox::centred(qr_width, qr_height, size, size)
}

/// Scale `width` x `height` so the longest side fits in `max_side`.
///
/// Aspect ratio is kept and images are never enlarged.
pub fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    if width <= max_side && height <= max_side {
        return (width, height);
    }

    let scale = max_side as f32 / width.max(height) as f32;
    let w = ((width as f32 * scale).round() as u32).clamp(1, max_side);
    let h = ((height as f32 * scale).round() as u32).clamp(1, max_side);
    (w, h)
}

/// Fill a rounded rectangle, blending over what is already on the canvas.
///
/// Corner arcs are anti-aliased by pixel coverage. The radius is clamped to
/// half the shorter side.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: LayoutBox, radius: u32, colour: Colour) {
    if rect.is_empty() {
        return;
    }

    let w = rect.width as f32;
    let h = rect.height as f32;
    let r = (radius as f32).min(w / 2.0).min(h / 2.0);

    let x_end = (rect.x + rect.width).min(canvas.width());
    let y_end = (rect.y + rect.height).min(canvas.height());

    for py in rect.y..y_end {
        for px in rect.x..x_end {
            let fx = (px - rect.x) as f32 + 0.5;
            let fy = (py - rect.y) as f32 + 0.5;

            let coverage = if r < 0.5 {
                1.0
            } else {
                // Distance from the nearest corner centre; zero along the straight edges
                let cx = fx.clamp(r, w - r);
                let cy = fy.clamp(r, h - r);
                let d = ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt();
                (r + 0.5 - d).clamp(0.0, 1.0)
            };

            if coverage <= 0.0 {
                continue;
            }

            let alpha = (colour.a as f32 * coverage).round() as u8;
            let src: Rgba<u8> = colour.with_alpha(alpha).into();
            let dst = canvas.get_pixel_mut(px, py);
            if alpha == 255 {
                *dst = src;
            } else {
                dst.blend(&src);
            }
        }
    }
}

/// Place `logo` in a rounded white container at the centre of `qr`.
///
/// Returns a new image; `qr` is left untouched.
pub fn overlay_logo(qr: &RgbaImage, logo: &RgbaImage) -> RgbaImage {
    let mut out = qr.clone();

    let container = logo_container(qr.width(), qr.height());
    if container.is_empty() {
        return out;
    }

    let mut layer = RgbaImage::new(container.width, container.height);
    fill_rounded_rect(
        &mut layer,
        LayoutBox::new(0, 0, container.width, container.height),
        ratio_of(container.width, LOGO_CORNER_RATIO),
        CONTAINER_COLOUR,
    );
    imageops::overlay(&mut out, &layer, container.x as i64, container.y as i64);

    let margin = ratio_of(container.width, LOGO_MARGIN_RATIO);
    let max_side = container.width.saturating_sub(2 * margin);
    if max_side == 0 || logo.width() == 0 || logo.height() == 0 {
        return out;
    }

    let (w, h) = fit_within(logo.width(), logo.height(), max_side);
    let scaled = if (w, h) == logo.dimensions() {
        logo.clone()
    } else {
        imageops::resize(logo, w, h, FilterType::Lanczos3)
    };

    let slot = LayoutBox::centred(container.width, container.height, w, h);
    imageops::overlay(
        &mut out,
        &scaled,
        (container.x + slot.x) as i64,
        (container.y + slot.y) as i64,
    );

    out
}

/// Load a logo from `path` and overlay it.
///
/// A missing or unreadable logo leaves the QR image unchanged and yields a
/// warning instead of an error.
pub fn overlay_logo_file(qr: &RgbaImage, path: &Path) -> Outcome<RgbaImage> {
    match load_logo(path) {
        Ok(logo) => Outcome::clean(overlay_logo(qr, &logo)),
        Err(err) => Outcome::degraded(
            qr.clone(),
            Warning::new("qrtool::logo::overlay", format!("{}; skipping logo overlay", err))
                .with_help("Check the --logo path points to a readable image"),
        ),
    }
}

/// Wrap `img` in a rounded card of `background`.
///
/// The padding is derived from the input width and applied on all four sides.
pub fn add_frame(img: &RgbaImage, background: Colour) -> RgbaImage {
    let pad = ratio_of(img.width(), FRAME_PADDING_RATIO);
    let width = img.width() + 2 * pad;
    let height = img.height() + 2 * pad;

    let mut canvas = RgbaImage::new(width, height);
    fill_rounded_rect(
        &mut canvas,
        LayoutBox::new(0, 0, width, height),
        ratio_of(width.min(height), FRAME_CORNER_RATIO),
        background,
    );
    imageops::overlay(&mut canvas, img, pad as i64, pad as i64);

    canvas
}
