//! Input/output path checks.

use std::path::Path;

/// Suffix match on the lowercased file name, so a bare `.png` counts too.
fn has_extension(path: &Path, ext: &str) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy().to_lowercase();
        name.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.'))
    })
}

/// Whether the path has a `.png` extension (case-insensitive).
pub fn is_png_file(path: &Path) -> bool {
    has_extension(path, "png")
}

/// Whether the path has a `.go` extension (case-insensitive).
pub fn is_go_file(path: &Path) -> bool {
    has_extension(path, "go")
}
