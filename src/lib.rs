//! qrtool - QR code generator with logo inlay and colour inference
//!
//! Encodes text into a QR image, optionally places a logo in a rounded
//! container at its centre, derives brand colours from that logo, and wraps
//! the result in a rounded frame.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod warning;

pub use config::StyleConfig;
pub use error::{QrError, Result};
pub use pipeline::{generate, Generated, QrRequest, Rendered};
pub use render::{add_frame, encode, overlay_logo, sample_average, EcLevel, EncodeOptions, LogoStyle};
pub use types::{format_payload, Colour, Match, Palette, PaletteEntry, PayloadMode, BRAND_PALETTE};
pub use warning::{Outcome, Warning, Warnings};
