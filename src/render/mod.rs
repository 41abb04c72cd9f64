//! Rendering module for qrtool.
//!
//! Rasterises QR symbols, samples logo colours, and composes the logo
//! inlay and frame.

pub mod compose;
mod encode;
mod image_io;
mod sample;

pub use compose::{add_frame, fill_rounded_rect, overlay_logo, overlay_logo_file, LayoutBox};
pub use encode::{encode, EcLevel, EncodeOptions, DEFAULT_BORDER, DEFAULT_BOX_SIZE};
pub use image_io::{load_logo, save_image};
pub use sample::{
    average_visible, sample_average, style_for_logo, style_for_logo_file, LogoStyle, SAMPLE_SIZE,
};
