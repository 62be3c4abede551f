//! Constants for the Rust splitter
//!
//! This module contains the regex fragments and generated-code templates used
//! by the locator, the module builder and the declaration inserter.

use regex::Regex;
use std::sync::OnceLock;

/// Leading `///` doc lines, then `#[...]` attribute lines, then indentation.
///
/// Each line is matched on its own; a doc or attribute prefix never spans
/// across a newline. Lines may end in `\r\n`.
pub const ITEM_PREFIX: &str =
    r"(?:[ \t]*///[^\n]*\n)*(?:[ \t]*#\[[^\n]*\][ \t]*\r?\n)*[ \t]*";

/// `pub`, `pub(crate)`, `pub(super)`, `pub(in path)`
pub const VISIBILITY: &str = r"pub(?:\s*\([^)]*\))?\s+";

/// Generic parameter list without nested `>`
pub const GENERICS: &str = r"<[^>]*>";

/// Header comment written at the top of every generated module
pub fn module_header(module_name: &str) -> String {
    format!("// {module_name}.rs - Module for {module_name}")
}

/// `mod name;` line inserted into the rewritten source
pub fn module_declaration(module_name: &str) -> String {
    format!("mod {module_name};")
}

/// `use name::*;` line inserted into the rewritten source
pub fn module_glob_import(module_name: &str) -> String {
    format!("use {module_name}::*;")
}

/// Get cached identifier pattern
static IDENTIFIER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Regex pattern for a plain (non-raw) Rust identifier
///
/// Matches: `foo`, `_bar`, `MCTSResult`, `huber_loss2`
pub fn identifier_pattern() -> &'static Regex {
    IDENTIFIER_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Valid identifier regex")
    })
}

/// Strict and reserved keywords (2021 edition); none of them can name a
/// module or a definition without the `r#` prefix
pub const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Whether `name` can be used as a module or definition name
pub fn is_identifier(name: &str) -> bool {
    name != "_" && !KEYWORDS.contains(&name) && identifier_pattern().is_match(name)
}
