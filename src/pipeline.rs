//! End-to-end QR generation.
//!
//! Sequence: format the payload, decide colours (sampling the logo when
//! auto-styling), encode, inlay the logo, frame, and save. Logo problems are
//! collected as warnings; payload and output problems are errors.

use std::path::PathBuf;

use image::RgbaImage;

use crate::error::Result;
use crate::render::{
    add_frame, encode, overlay_logo_file, save_image, style_for_logo_file, EcLevel, EncodeOptions,
    LogoStyle, DEFAULT_BORDER, DEFAULT_BOX_SIZE,
};
use crate::types::{format_payload, Colour, PayloadMode, BRAND_PALETTE};
use crate::warning::{Warning, Warnings};

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "qr.png";

/// A fully resolved generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Raw input text.
    pub data: String,
    pub mode: PayloadMode,
    pub out: PathBuf,
    /// Pixels per module.
    pub box_size: u32,
    pub fill: Colour,
    pub background: Colour,
    pub logo: Option<PathBuf>,
    /// Wrap the result in a rounded card.
    pub frame: bool,
    /// Replace `fill`/`background` with colours derived from the logo.
    pub auto_style: bool,
}

impl QrRequest {
    /// A request with builtin defaults for everything but the data.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mode: PayloadMode::Auto,
            out: PathBuf::from(DEFAULT_OUTPUT),
            box_size: DEFAULT_BOX_SIZE,
            fill: Colour::BLACK,
            background: Colour::WHITE,
            logo: None,
            frame: true,
            auto_style: false,
        }
    }

    /// Stronger error correction when a logo will cover the centre.
    pub fn ec_level(&self) -> EcLevel {
        if self.logo.is_some() {
            EcLevel::H
        } else {
            EcLevel::M
        }
    }
}

/// An in-memory result, before saving.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub image: RgbaImage,
    /// The exact string that was encoded.
    pub payload: String,
    pub ec_level: EcLevel,
    pub fill: Colour,
    pub background: Colour,
    /// Colours inferred from the logo, when auto-styling succeeded.
    pub style: Option<LogoStyle>,
    pub warnings: Warnings,
}

/// A saved result.
#[derive(Debug, Clone)]
pub struct Generated {
    pub path: PathBuf,
    pub rendered: Rendered,
}

/// Pick the fill/background pair for a request.
fn choose_colours(request: &QrRequest, warnings: &mut Warnings) -> (Colour, Colour, Option<LogoStyle>) {
    if !request.auto_style {
        return (request.fill, request.background, None);
    }

    let Some(logo) = &request.logo else {
        warnings.push(
            Warning::new(
                "qrtool::style::no-logo",
                "Auto-style needs a logo; using the configured colours",
            )
            .with_help("Pass --logo alongside --auto-style"),
        );
        return (request.fill, request.background, None);
    };

    match style_for_logo_file(logo, &BRAND_PALETTE) {
        Ok(style) => (style.fill.colour, style.background, Some(style)),
        Err(err) => {
            warnings.push(Warning::new(
                "qrtool::logo::style",
                format!("{}; using default colours", err),
            ));
            (Colour::BLACK, Colour::WHITE, None)
        }
    }
}

/// Build the final image without touching the output path.
pub fn render(request: &QrRequest) -> Result<Rendered> {
    let mut warnings = Warnings::new();

    let payload = format_payload(&request.data, request.mode);
    let ec_level = request.ec_level();

    // Colours are baked in by the encoder, so they must be settled first.
    let (fill, background, style) = choose_colours(request, &mut warnings);

    let options = EncodeOptions {
        ec_level,
        box_size: request.box_size,
        border: DEFAULT_BORDER,
        fill,
        background,
    };
    let mut image = encode(&payload, &options)?;

    if let Some(logo) = &request.logo {
        image = overlay_logo_file(&image, logo).into_value(&mut warnings);
    }

    if request.frame {
        image = add_frame(&image, background);
    }

    Ok(Rendered {
        image,
        payload,
        ec_level,
        fill,
        background,
        style,
        warnings,
    })
}

/// Render and save to `request.out`.
pub fn generate(request: &QrRequest) -> Result<Generated> {
    let rendered = render(request)?;
    save_image(&rendered.image, &request.out)?;

    Ok(Generated {
        path: request.out.clone(),
        rendered,
    })
}
