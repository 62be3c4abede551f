//! Property-based tests for the locator and extractor
//!
//! These tests use `proptest` to generate synthetic, well-formed sources and
//! verify properties that must hold for every input.
//!
//! # Coverage
//!
//! - brace balance for nesting depths 0..=10
//! - round-trip completeness of multi-function extraction
//! - idempotence of matching after removal
//! - reverse-order impl removal vs. one-pass removal

use modsplit_foundation::DefinitionKind;
use modsplit_lang_rust::{
    extract_function, extract_struct_and_impls, locate, locate_impl_blocks, match_definition,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Function whose body nests `depth` blocks
fn nested_function(name: &str, depth: usize) -> String {
    let mut body = String::from("    let mut total = 0;\n");
    for level in 0..depth {
        body.push_str(&"    ".repeat(level + 1));
        body.push_str("if total >= 0 {\n");
    }
    body.push_str(&"    ".repeat(depth + 1));
    body.push_str("total += 1;\n");
    for level in (0..depth).rev() {
        body.push_str(&"    ".repeat(level + 1));
        body.push_str("}\n");
    }
    format!("fn {name}() -> i32 {{\n{body}    total\n}}")
}

fn function_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-z0-9]{0,6}", 1..8)
        .prop_map(|names| names.into_iter().map(|n| format!("f_{n}")).collect())
}

// ============================================================================
// Brace balance
// ============================================================================

#[test]
fn brace_balance_for_every_depth() {
    for depth in 0..=10 {
        let function = nested_function("deep", depth);
        let buffer = format!("const BEFORE: u8 = 0;\n\n{function}\n\nfn after() {{}}\n");

        let start = locate(&buffer, "deep", DefinitionKind::Function)
            .unwrap()
            .expect("nested function should be located");
        let m = match_definition(&buffer, start).expect("body should balance");

        assert_eq!(m.text, function, "depth {depth}");
        assert_eq!(&buffer[m.end..], "\n\nfn after() {}\n", "depth {depth}");
    }
}

proptest! {
    /// Property: extraction returns exactly the generated function for any depth
    #[test]
    fn prop_extract_nested_exact(depth in 0usize..=10, padding in "\n{0,4}") {
        let function = nested_function("target", depth);
        let buffer = format!("{padding}{function}{padding}");

        let extraction = extract_function(&buffer, "target").unwrap();
        prop_assert_eq!(extraction.text, function);
        prop_assert_eq!(extraction.remaining, format!("{padding}{padding}"));
    }

    /// Property: every extracted function plus the remaining buffer accounts for
    /// all of the original text, with nothing lost or duplicated
    #[test]
    fn prop_round_trip_completeness(
        names in function_names(),
        depths in prop::collection::vec(0usize..4, 8),
    ) {
        let functions: Vec<String> = names
            .iter()
            .zip(depths.iter().cycle())
            .map(|(name, depth)| nested_function(name, *depth))
            .collect();
        let original = format!("mod test;\n\n{}\n", functions.join("\n\n"));

        let mut buffer = original.clone();
        let mut extracted = Vec::new();
        for name in names.iter().rev() {
            let extraction = extract_function(&buffer, name).unwrap();
            extracted.push(extraction.text);
            buffer = extraction.remaining;
        }

        let expected: BTreeSet<&String> = functions.iter().collect();
        let actual: BTreeSet<&String> = extracted.iter().collect();
        prop_assert_eq!(actual, expected);

        let removed: usize = extracted.iter().map(String::len).sum();
        prop_assert_eq!(buffer.len() + removed, original.len());
        prop_assert!(buffer.starts_with("mod test;\n"));
        prop_assert!(buffer.chars().all(|c| c == '\n' || "mod test;".contains(c)));
    }

    /// Property: a removed definition can no longer be located
    #[test]
    fn prop_locate_after_removal_is_none(names in function_names()) {
        let buffer = names
            .iter()
            .map(|name| nested_function(name, 1))
            .collect::<Vec<_>>()
            .join("\n\n");

        let target = &names[0];
        let extraction = extract_function(&buffer, target).unwrap();
        prop_assert_eq!(
            locate(&extraction.remaining, target, DefinitionKind::Function).unwrap(),
            None
        );
        for other in &names[1..] {
            prop_assert!(
                locate(&extraction.remaining, other, DefinitionKind::Function)
                    .unwrap()
                    .is_some()
            );
        }
    }
}

// ============================================================================
// Reverse-order impl removal
// ============================================================================

#[test]
fn reverse_order_removal_matches_one_pass_removal() {
    let buffer = "\
struct Counter {
    value: u32,
}

impl Counter {
    fn one(&self) -> u32 {
        1
    }
}

const MIDDLE: u32 = 2;

impl Counter {
    fn two(&self) -> u32 {
        2
    }
}

fn free() {}

impl Counter {
    fn three(&self) -> u32 {
        3
    }
}
";
    let extraction = extract_struct_and_impls(buffer, "Counter").unwrap();
    assert_eq!(extraction.blocks.len(), 4);

    // Order-independent reference: keep every byte outside the located spans
    let without_struct = buffer.replacen(&extraction.blocks[0], "", 1);
    let spans = locate_impl_blocks(&without_struct, "Counter").unwrap();
    assert_eq!(spans.len(), 3);
    assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));

    let expected: String = without_struct
        .char_indices()
        .filter(|(i, _)| !spans.iter().any(|s| s.contains(i)))
        .map(|(_, c)| c)
        .collect();

    assert_eq!(extraction.remaining, expected);
    assert!(extraction.blocks[1].contains("fn one"));
    assert!(extraction.blocks[2].contains("fn two"));
    assert!(extraction.blocks[3].contains("fn three"));
    assert!(extraction.remaining.contains("const MIDDLE: u32 = 2;"));
    assert!(extraction.remaining.contains("fn free() {}"));
}
