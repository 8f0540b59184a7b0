use std::path::PathBuf;

use clap::Parser;

use svg2irbcam::{convert_file, init_logging, ConversionParameters};

/// Convert SVG paths to an IRBCAM-compatible JSON path program.
#[derive(Parser, Debug)]
#[command(name = "svg2irbcam", version, about)]
struct Cli {
    /// Path to the input SVG file
    svg_path: PathBuf,
    /// Path to save the output JSON file
    json_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let cli = Cli::parse();
    let params = ConversionParameters::default();
    convert_file(&cli.svg_path, &cli.json_path, &params)?;

    println!("Transformed path data saved to {}.", cli.json_path.display());
    Ok(())
}
