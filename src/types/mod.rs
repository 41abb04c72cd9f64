//! Core domain types for qrtool.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - The ordered brand palette with nearest-colour search
//! - `PayloadMode` - How input text maps to an encoded payload

mod colour;
mod palette;
mod payload;

pub use colour::Colour;
pub use palette::{Match, Palette, PaletteEntry, Role, BRAND_PALETTE};
pub use payload::{format_payload, PayloadMode};
