//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::{QrError, Result};

use super::palette::BRAND_PALETTE;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Resolve a user-supplied colour.
    ///
    /// Accepts, in order of precedence:
    /// - a `#`-prefixed hex string (see [`Colour::from_hex`])
    /// - a brand palette name such as `deep_accent` or `bg_main`
    /// - a CSS/SVG colour name such as `black` or `rebeccapurple`
    /// - a bare hex string without the `#`
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.starts_with('#') {
            return Self::from_hex(spec);
        }

        let name = spec.to_ascii_lowercase();
        if let Some(colour) = BRAND_PALETTE.get(&name) {
            return Ok(colour);
        }
        if let Some(named) = palette::named::from_str(&name) {
            return Ok(Self::rgb(named.red, named.green, named.blue));
        }

        Self::from_hex(spec).map_err(|_| QrError::Parse {
            message: format!("Unknown colour: {}", spec),
            help: Some(
                "Use a hex value (#1E3A5F), a CSS name (navy), or a brand colour (see --list-colours)"
                    .to_string(),
            ),
        })
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                // #RGB[A] -> #RRGGBB[AA]
                let mut nibbles = [15u8; 4];
                for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
                    let d = parse_hex_digit(c)?;
                    *slot = d << 4 | d;
                }
                let [r, g, b, a] = nibbles;
                Ok(Self::new(r, g, b, if hex.len() == 3 { 255 } else { a }))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Squared Euclidean distance in RGB space. Alpha is ignored.
    pub fn distance_sq(self, other: Colour) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(colour: Colour) -> Self {
        Rgba(colour.to_rgba())
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self::new(r, g, b, a)
    }
}

impl FromStr for Colour {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> QrError {
    QrError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| QrError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(QrError::Parse {
            message: format!("Invalid hex byte: {}", s),
            help: None,
        });
    }
    u8::from_str_radix(s, 16).map_err(|_| QrError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
