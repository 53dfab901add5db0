//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use image_engine::{LuminanceModel, PanelSize};

use crate::config::defaults::settings_help;
use crate::config::validation::{
    parse_bytes_per_line, parse_luminance, parse_package, parse_panel_size, parse_threshold,
};

/// Convert a PNG image into a packed 1bpp Go byte array.
///
/// Both paths are positional; when either is missing a usage line is printed
/// instead of an error.
#[derive(Debug, Default, Parser)]
#[command(name = "image2bytes", version, after_long_help = settings_help())]
pub struct Cli {
    /// Source image (.png)
    pub input: Option<PathBuf>,

    /// Generated Go file (.go)
    pub output: Option<PathBuf>,

    /// Array identifier [default: derived from the output file name]
    #[arg(long)]
    pub name: Option<String>,

    /// Go package name of the generated file
    #[arg(long, value_parser = parse_package)]
    pub package: Option<String>,

    /// Luminance model: grayscale or perceptual
    #[arg(long, value_parser = parse_luminance)]
    pub luminance: Option<LuminanceModel>,

    /// Ink cutoff on the 16-bit luminance scale (decimal or 0x hex)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<u16>,

    /// Hex literals per line of the array (1-64)
    #[arg(long, value_parser = parse_bytes_per_line)]
    pub bytes_per_line: Option<usize>,

    /// Omit the <Name>Width / <Name>Height constants
    #[arg(long)]
    pub no_dimensions: bool,

    /// Resize to WIDTHxHEIGHT (or 'badger2040w') before packing
    #[arg(long, value_parser = parse_panel_size)]
    pub resize: Option<PanelSize>,

    /// Anything after the output path is ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<String>,
}
