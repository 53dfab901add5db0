//! PNG to Go byte-array converter for e-paper displays.
//!
//! Pipeline: decode PNG -> optional panel resize -> 1bpp threshold packing ->
//! Go source file with a `[]byte` literal and dimension constants.

pub mod cli;
pub mod config;
pub mod paths;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bitmap_codegen::{GoArray, generate_go_file, identifier_from_path, is_valid_identifier};
use image_engine::{load_png, pack_bitmap, resize_to_panel};
use tracing::{info, warn};

use cli::Cli;
use config::AppConfig;

pub const USAGE: &str = "Usage: image2bytes input.png output.go";
pub const INPUT_NOT_PNG: &str = "Error: Input file must be a PNG file (with .png extension)";
pub const OUTPUT_NOT_GO: &str = "Error: Output file must be a Go file (with .go extension)";

/// How a run ended without an unrecoverable error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Positional arguments were missing; the usage line was printed.
    Usage,
    /// Arguments were rejected; the printed message is attached.
    Rejected(String),
    /// The Go file was generated.
    Written {
        path: PathBuf,
        name: String,
        width: u32,
        height: u32,
        bytes: usize,
    },
}

/// Load .env from the working directory, if present.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded .env from: {}", path.display()),
        Err(e) if e.not_found() => {
            info!("No .env file found, using system environment variables")
        }
        Err(e) => warn!("Failed to load .env: {e}"),
    }
}

/// Run one conversion.
///
/// User-facing messages go to `out`. Usage problems are reported there and
/// end the run cleanly; config, I/O and decode failures are returned as errors.
/// `load_config` is only called once the arguments have been accepted, so a
/// broken environment never hides the usage line.
pub fn run<W, F>(cli: &Cli, load_config: F, out: &mut W) -> anyhow::Result<RunOutcome>
where
    W: Write,
    F: FnOnce() -> anyhow::Result<AppConfig>,
{
    let (Some(input), Some(output)) = (cli.input.as_deref(), cli.output.as_deref()) else {
        writeln!(out, "{USAGE}")?;
        return Ok(RunOutcome::Usage);
    };

    if !paths::is_png_file(input) {
        return reject(out, INPUT_NOT_PNG.to_string());
    }
    if !paths::is_go_file(output) {
        return reject(out, OUTPUT_NOT_GO.to_string());
    }

    let name = match &cli.name {
        Some(name) if is_valid_identifier(name) => name.clone(),
        Some(name) => {
            return reject(out, format!("Error: {name:?} is not a valid Go identifier"));
        }
        None => {
            let derived = identifier_from_path(output);
            if !is_valid_identifier(&derived) {
                return reject(
                    out,
                    format!(
                        "Error: Cannot derive a Go identifier from {}; pass --name",
                        output.display()
                    ),
                );
            }
            derived
        }
    };

    if !cli.ignored.is_empty() {
        warn!(ignored = ?cli.ignored, "Ignoring extra arguments");
    }

    let mut config = load_config()?;
    config.apply_cli(cli);
    info!(
        input = %input.display(),
        output = %output.display(),
        ident = %name,
        luminance = %config.luminance,
        threshold = config.threshold,
        "Starting conversion"
    );

    let mut image =
        load_png(input).with_context(|| format!("Cannot read image {}", input.display()))?;
    if let Some(size) = config.target_size {
        image = resize_to_panel(&image, size);
    }

    let (width, height) = image.dimensions();
    writeln!(out, "Image dimensions: {width}x{height}")?;

    let bitmap = pack_bitmap(&image, &config.threshold());
    info!(
        width = bitmap.width(),
        height = bitmap.height(),
        bytes = bitmap.data().len(),
        "Image packed"
    );

    let array = GoArray {
        name: &name,
        data: bitmap.data(),
        width: bitmap.width(),
        height: bitmap.height(),
    };
    generate_go_file(output, &array, &config.emit_options())
        .with_context(|| format!("Cannot generate {}", output.display()))?;

    writeln!(out, "Done. Bytes written to {}", output.display())?;
    Ok(RunOutcome::Written {
        path: output.to_path_buf(),
        name,
        width,
        height,
        bytes: bitmap.data().len(),
    })
}

fn reject<W: Write>(out: &mut W, message: String) -> anyhow::Result<RunOutcome> {
    writeln!(out, "{message}")?;
    Ok(RunOutcome::Rejected(message))
}
