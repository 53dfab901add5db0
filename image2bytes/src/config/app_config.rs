//! Runtime configuration loaded from defaults, environment and CLI flags.

use anyhow::anyhow;
use bitmap_codegen::EmitOptions;
use image_engine::{LuminanceModel, PanelSize, Threshold};

use super::defaults::{self, get_default};
use super::validation::{
    parse_bool, parse_bytes_per_line, parse_luminance, parse_package, parse_target_size,
    parse_threshold,
};
use crate::cli::Cli;

/// Effective conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub luminance: LuminanceModel,
    pub threshold: u16,
    pub bytes_per_line: usize,
    pub emit_dimensions: bool,
    pub package: String,
    pub target_size: Option<PanelSize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            luminance: LuminanceModel::Grayscale,
            threshold: image_engine::luma::MIDPOINT,
            bytes_per_line: 12,
            emit_dimensions: true,
            package: "main".into(),
            target_size: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset or blank keys
    /// fall back to their defaults; invalid values are an error naming the key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| get_default(key).unwrap_or_default().to_string())
        };

        Ok(Self {
            luminance: setting(&get, defaults::LUMINANCE, parse_luminance)?,
            threshold: setting(&get, defaults::THRESHOLD, parse_threshold)?,
            bytes_per_line: setting(&get, defaults::BYTES_PER_LINE, parse_bytes_per_line)?,
            emit_dimensions: setting(&get, defaults::EMIT_DIMENSIONS, parse_bool)?,
            package: setting(&get, defaults::PACKAGE, parse_package)?,
            target_size: setting(&get, defaults::TARGET_SIZE, parse_target_size)?,
        })
    }

    /// Command-line flags take precedence over environment settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(model) = cli.luminance {
            self.luminance = model;
        }
        if let Some(cutoff) = cli.threshold {
            self.threshold = cutoff;
        }
        if let Some(n) = cli.bytes_per_line {
            self.bytes_per_line = n;
        }
        if cli.no_dimensions {
            self.emit_dimensions = false;
        }
        if let Some(package) = &cli.package {
            self.package.clone_from(package);
        }
        if let Some(size) = cli.resize {
            self.target_size = Some(size);
        }
    }

    pub fn threshold(&self) -> Threshold {
        Threshold::new(self.luminance, self.threshold)
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions::new()
            .with_package(self.package.clone())
            .with_bytes_per_line(self.bytes_per_line)
            .with_dimension_constants(self.emit_dimensions)
    }
}

fn setting<T>(
    get: &impl Fn(&str) -> String,
    key: &str,
    parse: fn(&str) -> Result<T, String>,
) -> Result<T, anyhow::Error> {
    parse(&get(key)).map_err(|e| anyhow!("invalid {key}: {e}"))
}
