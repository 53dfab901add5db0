//! Go identifier derivation.
//!
//! Any character that is not a letter or digit is a word boundary. Each word
//! gets its first character upper-cased and the words are joined without a
//! separator: `"test_output"` becomes `"TestOutput"`.

use std::path::Path;

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Letters that Go accepts in identifiers. Letter-numbers such as `Ⅻ` are
/// alphabetic to Rust but not letters to Go.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Letters and decimal digits. Superscripts and other numeric symbols
/// (`²`, `½`) are word boundaries.
fn is_word_char(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit()
}

/// Convert an arbitrary name into an exported-style Go identifier.
///
/// Digits are kept where they appear; only the first character of each word is
/// upper-cased. An input with no letters or digits yields an empty string.
pub fn to_identifier(name: &str) -> String {
    name.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .flat_map(|word| {
            let mut chars = word.chars();
            let first = chars.next().into_iter().flat_map(char::to_uppercase);
            first.chain(chars)
        })
        .collect()
}

/// Derive an identifier from a file path's stem (directory and extension are
/// dropped).
pub fn identifier_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| to_identifier(&stem.to_string_lossy()))
        .unwrap_or_default()
}

/// Whether `s` can be used as a Go identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (is_letter(first) || first == '_')
        && chars.all(|c| is_word_char(c) || c == '_')
        && !GO_KEYWORDS.contains(&s)
}
