use clap::Parser;
use miette::Result;
use qrtool::cli::Cli;
use qrtool::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    qrtool::cli::run(cli, &printer)?;

    Ok(())
}
