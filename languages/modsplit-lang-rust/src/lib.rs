//! Rust source splitting primitives
//!
//! Text-level operations for carving top-level definitions out of a Rust source
//! file without a syntax tree:
//!
//! - [`locator`] - regex patterns that find where a named function or struct starts
//! - [`extractor`] - brace counting, span removal, struct + impl extraction
//! - [`builder`] - rendering of generated module files
//! - [`declarations`] - `mod`/`use` insertion into the rewritten source
//!
//! # Example
//!
//! ```rust
//! use modsplit_lang_rust::extract_function;
//!
//! let source = "fn keep() {}\nfn foo() {\n    1\n}\n";
//! let extraction = extract_function(source, "foo").unwrap();
//! assert_eq!(extraction.text, "fn foo() {\n    1\n}");
//! assert_eq!(extraction.remaining, "fn keep() {}\n\n");
//! ```

pub mod builder;
pub mod constants;
pub mod declarations;
pub mod extractor;
pub mod locator;

// Re-export commonly used items for convenience
pub use builder::{build_module_content, collect_imports};
pub use constants::is_identifier;
pub use declarations::{insert_declarations, render_declarations};
pub use extractor::{
    extract_from, extract_function, extract_struct_and_impls, find_balanced_end,
    match_definition, remove_span, DefinitionMatch, Extraction, StructExtraction,
};
pub use locator::{locate, locate_impl_blocks, locate_struct};
