pub mod generate;
pub mod palette;

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{PayloadMode, BRAND_PALETTE};

/// qrtool - Generate QR codes in seconds (with optional centre logo)
#[derive(Parser, Debug, Default)]
#[command(name = "qrtool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The text, URL, phone number, or email to encode
    #[arg(required_unless_present = "list_colours")]
    pub data: Option<String>,

    /// Output filename [default: qr.png]
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Box size in pixels for each module [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// Fill colour: hex, CSS name, or brand colour [default: black]
    #[arg(long)]
    pub fill: Option<String>,

    /// Background colour: hex, CSS name, or brand colour [default: white]
    #[arg(long)]
    pub bg: Option<String>,

    /// How to interpret the data [default: auto]
    #[arg(long, value_enum)]
    pub mode: Option<PayloadMode>,

    /// Logo image to place in the centre of the QR code
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Skip the rounded frame around the code
    #[arg(long)]
    pub no_frame: bool,

    /// Derive fill and background colours from the logo
    #[arg(long)]
    pub auto_style: bool,

    /// Style file (YAML) with defaults for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the brand palette and exit
    #[arg(long)]
    pub list_colours: bool,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    if cli.list_colours {
        palette::run(&BRAND_PALETTE);
        return Ok(());
    }

    generate::run(cli, printer)
}
