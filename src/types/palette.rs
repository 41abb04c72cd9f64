//! Brand palette and nearest-colour matching.
//!
//! The palette is a fixed, ordered table. Declaration order is significant:
//! it is the tie-break for [`Palette::nearest`].

use std::fmt;

use super::Colour;

/// Whether a palette entry may be picked as a foreground match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Eligible as a fill colour.
    Candidate,
    /// Background-only; never returned by nearest-colour search.
    Surface,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Candidate => write!(f, "candidate"),
            Role::Surface => write!(f, "surface"),
        }
    }
}

/// A named palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub colour: Colour,
    pub role: Role,
}

impl PaletteEntry {
    pub const fn candidate(name: &'static str, colour: Colour) -> Self {
        Self {
            name,
            colour,
            role: Role::Candidate,
        }
    }

    pub const fn surface(name: &'static str, colour: Colour) -> Self {
        Self {
            name,
            colour,
            role: Role::Surface,
        }
    }
}

/// Result of a nearest-colour search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Palette name of the winning entry.
    pub name: &'static str,
    /// The stored palette colour (not the query colour).
    pub colour: Colour,
    /// Squared RGB distance between the query and `colour`.
    pub distance_sq: u32,
}

/// An ordered, immutable collection of named colours.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Palette name
    pub name: &'static str,
    entries: &'static [PaletteEntry],
    fallback: PaletteEntry,
    background: PaletteEntry,
}

const DEEP_ACCENT: PaletteEntry = PaletteEntry::candidate("deep_accent", Colour::rgb(0x1E, 0x3A, 0x5F));
const BG_MAIN: PaletteEntry = PaletteEntry::surface("bg_main", Colour::WHITE);

const BRAND_ENTRIES: &[PaletteEntry] = &[
    DEEP_ACCENT,
    PaletteEntry::candidate("ink", Colour::rgb(0x11, 0x18, 0x27)),
    PaletteEntry::candidate("charcoal", Colour::rgb(0x37, 0x41, 0x51)),
    PaletteEntry::candidate("royal_blue", Colour::rgb(0x1D, 0x4E, 0xD8)),
    PaletteEntry::candidate("sky_blue", Colour::rgb(0x03, 0x69, 0xA1)),
    PaletteEntry::candidate("teal", Colour::rgb(0x0F, 0x76, 0x6E)),
    PaletteEntry::candidate("forest_green", Colour::rgb(0x15, 0x80, 0x3D)),
    PaletteEntry::candidate("olive", Colour::rgb(0x4D, 0x7C, 0x0F)),
    PaletteEntry::candidate("amber", Colour::rgb(0xB4, 0x53, 0x09)),
    PaletteEntry::candidate("burnt_orange", Colour::rgb(0xC2, 0x41, 0x0C)),
    PaletteEntry::candidate("crimson", Colour::rgb(0xB9, 0x1C, 0x1C)),
    PaletteEntry::candidate("magenta", Colour::rgb(0xBE, 0x18, 0x5D)),
    PaletteEntry::candidate("violet", Colour::rgb(0x6D, 0x28, 0xD9)),
    PaletteEntry::candidate("indigo", Colour::rgb(0x43, 0x38, 0xCA)),
    BG_MAIN,
    PaletteEntry::surface("bg_soft", Colour::rgb(0xF8, 0xFA, 0xFC)),
];

/// The builtin brand palette used by auto-styling.
pub const BRAND_PALETTE: Palette = Palette::new("brand", BRAND_ENTRIES, DEEP_ACCENT, BG_MAIN);

impl Palette {
    /// Create a palette over a static table.
    ///
    /// `fallback` is returned when no colour can be sampled; `background` is
    /// the surface paired with matched fills.
    pub const fn new(
        name: &'static str,
        entries: &'static [PaletteEntry],
        fallback: PaletteEntry,
        background: PaletteEntry,
    ) -> Self {
        Self {
            name,
            entries,
            fallback,
            background,
        }
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.colour)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }

    /// Entries eligible for nearest-colour search.
    pub fn candidates(&self) -> impl Iterator<Item = &'static PaletteEntry> {
        self.entries.iter().filter(|e| e.role == Role::Candidate)
    }

    /// Background-only entries.
    pub fn surfaces(&self) -> impl Iterator<Item = &'static PaletteEntry> {
        self.entries.iter().filter(|e| e.role == Role::Surface)
    }

    /// Fill colour used when a logo yields no usable pixels.
    pub fn fallback(&self) -> PaletteEntry {
        self.fallback
    }

    /// Background paired with any matched fill colour.
    pub fn background(&self) -> PaletteEntry {
        self.background
    }

    /// Find the candidate entry closest to `colour`.
    ///
    /// Distance is squared RGB Euclidean. Surface entries are skipped, and
    /// ties go to the entry declared first. A palette without candidates
    /// answers with its fallback.
    pub fn nearest(&self, colour: Colour) -> Match {
        let mut best = Match {
            name: self.fallback.name,
            colour: self.fallback.colour,
            distance_sq: u32::MAX,
        };

        for entry in self.candidates() {
            let dist = colour.distance_sq(entry.colour);
            if dist < best.distance_sq {
                best = Match {
                    name: entry.name,
                    colour: entry.colour,
                    distance_sq: dist,
                };
            }
        }

        if best.distance_sq == u32::MAX {
            best.distance_sq = colour.distance_sq(best.colour);
        }
        best
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        BRAND_PALETTE
    }
}
