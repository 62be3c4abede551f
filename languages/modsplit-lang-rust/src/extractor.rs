//! Brace-balanced extraction
//!
//! The extractor never mutates its input. Every operation borrows the current
//! buffer and hands back the remaining text as a new value; callers replace
//! their buffer with it on success and keep the old one on failure.
//!
//! Brace counting is purely lexical: braces inside string literals, char
//! literals and comments are counted like any other brace, so a `"}"` in a
//! body ends the definition early.

use crate::locator::{function_pattern, locate_impl_blocks, locate_struct};
use modsplit_foundation::{DefinitionKind, SplitError, SplitResult};
use std::ops::Range;
use tracing::{debug, warn};

/// A located definition span and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionMatch {
    /// Offset of the declaration head (doc comments included)
    pub start: usize,
    /// Offset just past the matching closing brace
    pub end: usize,
    pub text: String,
}

impl DefinitionMatch {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Extracted text together with the buffer it was cut out of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub remaining: String,
}

/// A struct and its inherent impl blocks, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructExtraction {
    pub blocks: Vec<String>,
    pub remaining: String,
}

/// Find the offset just past the `}` that balances the first `{` at or after
/// `start`. Returns `None` if there is no `{` or the input ends first.
pub fn find_balanced_end(buffer: &str, start: usize) -> Option<usize> {
    let open = start + buffer.get(start..)?.find('{')?;
    let mut depth = 0usize;

    for (offset, byte) in buffer.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Match the definition starting at `start` through its closing brace
pub fn match_definition(buffer: &str, start: usize) -> Option<DefinitionMatch> {
    let end = find_balanced_end(buffer, start)?;
    Some(DefinitionMatch {
        start,
        end,
        text: buffer[start..end].to_string(),
    })
}

/// Cut `span` out of `buffer`, joining both sides verbatim
pub fn remove_span(buffer: &str, span: Range<usize>) -> String {
    let mut remaining = String::with_capacity(buffer.len() - span.len());
    remaining.push_str(&buffer[..span.start]);
    remaining.push_str(&buffer[span.end..]);
    remaining
}

/// Extract the brace-balanced definition starting at `start`
pub fn extract_from(buffer: &str, start: usize) -> Option<Extraction> {
    let m = match_definition(buffer, start)?;
    let remaining = remove_span(buffer, m.span());
    Some(Extraction {
        text: m.text,
        remaining,
    })
}

/// Locate a function by name and extract it
pub fn extract_function(buffer: &str, name: &str) -> SplitResult<Extraction> {
    let start = function_pattern(name)?
        .find(buffer)
        .map(|m| m.start())
        .ok_or_else(|| SplitError::not_found(DefinitionKind::Function, name))?;

    let extraction = extract_from(buffer, start)
        .ok_or_else(|| SplitError::truncated(DefinitionKind::Function, name))?;

    debug!(
        name = %name,
        start,
        len = extraction.text.len(),
        "Extracted function"
    );
    Ok(extraction)
}

/// Extract a struct followed by every inherent impl block for it.
///
/// Impl blocks are removed highest offset first so the spans found in a
/// single pass stay valid while earlier ones are still pending. The returned
/// blocks are in file order: the struct, then its impls.
pub fn extract_struct_and_impls(buffer: &str, name: &str) -> SplitResult<StructExtraction> {
    let mut blocks = Vec::new();

    let mut remaining = match locate_struct(buffer, name)? {
        Some(span) => {
            blocks.push(buffer[span.clone()].to_string());
            remove_span(buffer, span)
        }
        None => buffer.to_string(),
    };
    let struct_found = !blocks.is_empty();

    let spans = locate_impl_blocks(&remaining, name)?;
    let mut impls = Vec::with_capacity(spans.len());
    for span in spans.into_iter().rev() {
        impls.push(remaining[span.clone()].to_string());
        remaining.replace_range(span, "");
    }
    impls.reverse();

    if !struct_found && !impls.is_empty() {
        warn!(
            name = %name,
            impl_blocks = impls.len(),
            "Struct definition not found, extracting impl blocks only"
        );
    }

    blocks.extend(impls);
    if blocks.is_empty() {
        return Err(SplitError::not_found(DefinitionKind::Struct, name));
    }

    debug!(name = %name, blocks = blocks.len(), "Extracted struct");
    Ok(StructExtraction { blocks, remaining })
}
