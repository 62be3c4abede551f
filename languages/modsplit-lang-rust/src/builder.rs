//! Module content builder
//!
//! Renders the text of a generated module: a header comment, the sorted and
//! deduplicated import set, then every extracted fragment in the order
//! received.

use crate::constants::module_header;
use modsplit_foundation::ImportTable;
use std::collections::BTreeSet;

/// Import lines for `module_name`: global ∪ module defaults ∪ `extra`.
///
/// Lines are trimmed and blank lines dropped; the set orders them
/// lexicographically.
pub fn collect_imports(
    module_name: &str,
    imports: &ImportTable,
    extra: &[String],
) -> BTreeSet<String> {
    imports
        .global
        .iter()
        .chain(imports.for_module(module_name))
        .chain(extra)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render a module file. Never fails; no items yields header and imports only.
pub fn build_module_content(
    module_name: &str,
    items: &[String],
    imports: &ImportTable,
    extra: &[String],
) -> String {
    let mut content = module_header(module_name);
    content.push_str("\n\n");

    for line in collect_imports(module_name, imports, extra) {
        content.push_str(&line);
        content.push('\n');
    }
    content.push('\n');

    for item in items {
        content.push_str(item);
        content.push_str("\n\n");
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn table() -> ImportTable {
        ImportTable {
            global: vec!["use crate::test::{Deck, Plateau, Tile};".to_string()],
            modules: BTreeMap::from([(
                "mcts".to_string(),
                vec![
                    "use std::collections::HashMap;".to_string(),
                    "use rand::Rng;".to_string(),
                ],
            )]),
        }
    }

    #[test]
    fn test_imports_dedup_and_sorted() {
        let extra = vec![
            "use rand::Rng;".to_string(),
            "  use std::collections::HashMap;  ".to_string(),
            "use crate::test::{Deck, Plateau, Tile};".to_string(),
            "".to_string(),
            "use anyhow::Result;".to_string(),
        ];
        let imports: Vec<String> = collect_imports("mcts", &table(), &extra)
            .into_iter()
            .collect();

        assert_eq!(
            imports,
            vec![
                "use anyhow::Result;",
                "use crate::test::{Deck, Plateau, Tile};",
                "use rand::Rng;",
                "use std::collections::HashMap;",
            ]
        );
    }

    #[test]
    fn test_unknown_module_gets_global_only() {
        let imports = collect_imports("misc", &table(), &[]);
        assert_eq!(imports.len(), 1);
        assert!(imports.contains("use crate::test::{Deck, Plateau, Tile};"));
    }

    #[test]
    fn test_build_module_content_layout() {
        let items = vec![
            "fn a() {\n    1\n}".to_string(),
            "fn b() {}".to_string(),
        ];
        let content = build_module_content("utils", &items, &table(), &[]);

        assert_eq!(
            content,
            "// utils.rs - Module for utils\n\n\
             use crate::test::{Deck, Plateau, Tile};\n\n\
             fn a() {\n    1\n}\n\n\
             fn b() {}\n\n"
        );
    }

    #[test]
    fn test_build_module_content_empty_items() {
        let content = build_module_content("misc", &[], &ImportTable::default(), &[]);
        assert_eq!(content, "// misc.rs - Module for misc\n\n\n");
    }
}
