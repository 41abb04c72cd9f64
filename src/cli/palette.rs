use std::fmt::Write;

use crate::types::Palette;

/// One line per entry: `name: #HEX (role)`, in declaration order.
pub fn palette_listing(palette: &Palette) -> String {
    let mut out = String::new();
    for entry in palette.entries() {
        let _ = writeln!(out, "{}: {} ({})", entry.name, entry.colour, entry.role);
    }
    out
}

/// Print the palette to stdout.
pub fn run(palette: &Palette) {
    print!("{}", palette_listing(palette));
}
