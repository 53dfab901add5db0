//! Go source emitter.
//!
//! Output with dimension constants (the default):
//!
//! ```text
//! package main
//!
//! // LogoWidth and LogoHeight define image dimensions
//! const LogoWidth = 4
//! const LogoHeight = 2
//!
//! var Logo = []byte{
//!
//! 	0xA0, 0x50,
//! }
//! ```
//!
//! Without dimension constants the comment and constants are dropped and the
//! array opens with `var Logo = []byte{` directly followed by the first row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::identifier::is_valid_identifier;
use crate::{CodegenError, Result};

/// Formatting options for the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Go package clause.
    pub package: String,
    /// Hex literals per line of the array body.
    pub bytes_per_line: usize,
    /// Emit `<Name>Width` / `<Name>Height` constants.
    pub emit_dimension_constants: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package: "main".into(),
            bytes_per_line: 12,
            emit_dimension_constants: true,
        }
    }
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Builder: set bytes per line.
    pub fn with_bytes_per_line(mut self, n: usize) -> Self {
        self.bytes_per_line = n;
        self
    }

    /// Builder: set dimension-constant emission.
    pub fn with_dimension_constants(mut self, val: bool) -> Self {
        self.emit_dimension_constants = val;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_identifier(&self.package) {
            return Err(CodegenError::InvalidPackage(self.package.clone()));
        }
        if self.bytes_per_line == 0 {
            return Err(CodegenError::ZeroBytesPerLine);
        }
        Ok(())
    }
}

/// A named byte array with its image dimensions.
#[derive(Debug, Clone, Copy)]
pub struct GoArray<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl GoArray<'_> {
    fn validate(&self) -> Result<()> {
        if is_valid_identifier(self.name) {
            Ok(())
        } else {
            Err(CodegenError::InvalidIdentifier(self.name.to_string()))
        }
    }
}

/// Write the Go source for `array` to `out`.
pub fn write_go_source<W: Write>(
    out: &mut W,
    array: &GoArray<'_>,
    opts: &EmitOptions,
) -> Result<()> {
    opts.validate()?;
    array.validate()?;

    let name = array.name;
    write!(out, "package {}\n\n", opts.package)?;
    if opts.emit_dimension_constants {
        writeln!(out, "// {name}Width and {name}Height define image dimensions")?;
        writeln!(out, "const {name}Width = {}", array.width)?;
        write!(out, "const {name}Height = {}\n\n", array.height)?;
        writeln!(out, "var {name} = []byte{{")?;
    } else {
        write!(out, "var {name} = []byte{{")?;
    }

    for (i, b) in array.data.iter().enumerate() {
        if i % opts.bytes_per_line == 0 {
            write!(out, "\n\t")?;
        }
        write!(out, "0x{b:02X}, ")?;
    }
    write!(out, "\n}}\n")?;
    Ok(())
}

/// Create (or overwrite) `path` and write the Go source into it.
///
/// Nothing is created when the name or options are invalid. The file is
/// flushed and synced before returning so that late write failures surface
/// here instead of being dropped with the handle.
pub fn generate_go_file(path: &Path, array: &GoArray<'_>, opts: &EmitOptions) -> Result<()> {
    opts.validate()?;
    array.validate()?;

    let write_err = |source| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| CodegenError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    write_go_source(&mut writer, array, opts).map_err(|e| match e {
        CodegenError::Io(source) => write_err(source),
        other => other,
    })?;

    let file = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
    file.sync_all().map_err(write_err)?;

    debug!(
        path = %path.display(),
        name = array.name,
        bytes = array.data.len(),
        "Go source written"
    );
    Ok(())
}
