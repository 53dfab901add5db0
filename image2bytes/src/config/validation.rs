//! Setting value parsing and validation.
//!
//! Each parser returns a human-readable reason on failure. The same parsers
//! back both environment settings and command-line flags.

use std::sync::LazyLock;

use bitmap_codegen::is_valid_identifier;
use image_engine::{LuminanceModel, PanelSize};
use regex::Regex;

static RE_THRESHOLD_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[xX]([0-9A-Fa-f]{1,4})$").unwrap());
static RE_THRESHOLD_DEC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,5}$").unwrap());
static RE_PANEL_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([0-9]{1,5})x([0-9]{1,5})$|^badger2040w$").unwrap());

/// Luminance cutoff, decimal (`32768`) or hex (`0x8000`), 0..=65535.
pub fn parse_threshold(value: &str) -> Result<u16, String> {
    let value = value.trim();
    if let Some(caps) = RE_THRESHOLD_HEX.captures(value) {
        return u16::from_str_radix(&caps[1], 16).map_err(|e| e.to_string());
    }
    if RE_THRESHOLD_DEC.is_match(value) {
        return value
            .parse::<u16>()
            .map_err(|_| "must be between 0 and 65535".to_string());
    }
    Err("must be a decimal or 0x-prefixed hex integer".into())
}

pub fn parse_bytes_per_line(value: &str) -> Result<usize, String> {
    let v: usize = value.trim().parse().map_err(|_| "must be an integer")?;
    if !(1..=64).contains(&v) {
        return Err("must be between 1 and 64".into());
    }
    Ok(v)
}

pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err("must be 'true' or 'false'".into()),
    }
}

pub fn parse_luminance(value: &str) -> Result<LuminanceModel, String> {
    value.parse().map_err(|_| "must be 'grayscale' or 'perceptual'".into())
}

pub fn parse_package(value: &str) -> Result<String, String> {
    let value = value.trim();
    if !is_valid_identifier(value) {
        return Err(format!("{value:?} is not a valid Go package name"));
    }
    Ok(value.to_string())
}

/// `WIDTHxHEIGHT` or a known preset, both sides at least 1.
pub fn parse_panel_size(value: &str) -> Result<PanelSize, String> {
    let value = value.trim();
    if !RE_PANEL_SIZE.is_match(value) {
        return Err("expected WIDTHxHEIGHT (e.g. 296x128) or 'badger2040w'".into());
    }
    value.parse().map_err(|_| "width and height must be at least 1".into())
}

/// Like [`parse_panel_size`], but an empty value means "no resize".
pub fn parse_target_size(value: &str) -> Result<Option<PanelSize>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_panel_size(value).map(Some)
}
