//! All setting definitions with their default values.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

pub const LUMINANCE: &str = "IMAGE2BYTES_LUMINANCE";
pub const THRESHOLD: &str = "IMAGE2BYTES_THRESHOLD";
pub const BYTES_PER_LINE: &str = "IMAGE2BYTES_BYTES_PER_LINE";
pub const EMIT_DIMENSIONS: &str = "IMAGE2BYTES_EMIT_DIMENSIONS";
pub const PACKAGE: &str = "IMAGE2BYTES_PACKAGE";
pub const TARGET_SIZE: &str = "IMAGE2BYTES_TARGET_SIZE";

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (
        LUMINANCE,
        "grayscale",
        "Luminance model: 'grayscale' or 'perceptual'",
    ),
    (
        THRESHOLD,
        "0x8000",
        "Ink cutoff on the 16-bit luminance scale (decimal or 0x hex)",
    ),
    (BYTES_PER_LINE, "12", "Hex literals per line of the array (1-64)"),
    (
        EMIT_DIMENSIONS,
        "true",
        "Emit <Name>Width and <Name>Height constants",
    ),
    (PACKAGE, "main", "Go package name of the generated file"),
    (
        TARGET_SIZE,
        "",
        "Resize to WIDTHxHEIGHT (or 'badger2040w') before packing; empty keeps the source size",
    ),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Settings section appended to `--help`.
pub fn settings_help() -> String {
    let mut help = String::from("Environment settings (also read from .env; flags take precedence):\n");
    for &(key, _, _) in DEFS {
        let def = &DEFAULT_SETTINGS[key];
        let default = if def.default.is_empty() {
            "unset"
        } else {
            def.default
        };
        let _ = writeln!(help, "  {} [default: {default}]", def.key);
        let _ = writeln!(help, "      {}", def.description);
    }
    help
}
