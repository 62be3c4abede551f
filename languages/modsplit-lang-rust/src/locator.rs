//! Definition locator
//!
//! Finds where a named top-level definition starts, using regex patterns over
//! the raw text rather than a syntax tree. The reported start includes any
//! `///` doc lines and `#[...]` attribute lines directly above the item.
//!
//! # Known limitations
//!
//! - Generic parameter lists cannot contain a nested `>` (`<T: Into<String>>`
//!   does not match).
//! - Function parameter lists cannot contain `)` (tuple types, closures in
//!   default-free signatures like `f: fn(u8)`).
//! - Struct field lists cannot contain `{` or `}`.
//! - The first textual match wins. A method inside an `impl` block or a macro
//!   with the same name as the requested item may be picked instead.
//! - Impl blocks end at the first line that is exactly `}` at column zero
//!   (trailing blanks and a `\r` before the newline are allowed).

use crate::constants::{GENERICS, ITEM_PREFIX, VISIBILITY};
use modsplit_foundation::{DefinitionKind, SplitError, SplitResult};
use regex::Regex;
use std::ops::Range;
use tracing::debug;

/// Locate the start offset of a named definition.
///
/// Returns `Ok(None)` when there is no match. The only error is a pattern that
/// fails to compile, which cannot happen for escaped names short of hitting the
/// regex size limit.
pub fn locate(buffer: &str, name: &str, kind: DefinitionKind) -> SplitResult<Option<usize>> {
    let start = match kind {
        DefinitionKind::Function => function_pattern(name)?.find(buffer).map(|m| m.start()),
        DefinitionKind::Struct => locate_struct(buffer, name)?.map(|span| span.start),
    };

    debug!(name = %name, kind = %kind, start = ?start, "Located definition");
    Ok(start)
}

/// Locate a braced struct, returning the full span through its closing brace
pub fn locate_struct(buffer: &str, name: &str) -> SplitResult<Option<Range<usize>>> {
    Ok(struct_pattern(name)?.find(buffer).map(|m| m.range()))
}

/// Locate every inherent `impl` block for `name`, in file order
pub fn locate_impl_blocks(buffer: &str, name: &str) -> SplitResult<Vec<Range<usize>>> {
    // The pattern also consumes trailing blanks (and `\r`) on the closing line
    let spans: Vec<Range<usize>> = impl_pattern(name)?
        .find_iter(buffer)
        .map(|m| {
            let text = m.as_str().trim_end_matches([' ', '\t', '\r']);
            m.start()..m.start() + text.len()
        })
        .collect();

    debug!(name = %name, count = spans.len(), "Located impl blocks");
    Ok(spans)
}

/// Pattern matching a function head up to and including the body's `{`
pub fn function_pattern(name: &str) -> SplitResult<Regex> {
    let name = regex::escape(name);
    compile(&format!(
        r"{ITEM_PREFIX}(?:{VISIBILITY})?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?\bfn\s+{name}\s*(?:{GENERICS})?\s*\([^)]*\)(?:\s*->\s*[^{{]+)?\s*\{{"
    ))
}

/// Pattern matching a whole braced struct with a flat field list
pub fn struct_pattern(name: &str) -> SplitResult<Regex> {
    let name = regex::escape(name);
    compile(&format!(
        r"{ITEM_PREFIX}(?:{VISIBILITY})?\bstruct\s+{name}\s*(?:{GENERICS})?\s*\{{[^}}]*\}}"
    ))
}

/// Pattern matching an inherent impl block up to a column-zero `}` line
pub fn impl_pattern(name: &str) -> SplitResult<Regex> {
    let name = regex::escape(name);
    compile(&format!(
        r"(?ms){ITEM_PREFIX}\bimpl(?:{GENERICS})?\s+{name}(?:{GENERICS})?\s*\{{.*?\n\}}[ \t]*\r?$"
    ))
}

fn compile(pattern: &str) -> SplitResult<Regex> {
    Regex::new(pattern).map_err(|e| SplitError::pattern(e.to_string()))
}
