//! modsplit-services: runs a module plan against a source file
//!
//! [`Splitter`] owns the on-disk side (backup, module files, rewrite);
//! [`split_buffer`] is the pure text pass it is built on.

pub mod orchestrator;

pub use orchestrator::{split_buffer, ModuleResult, SplitOptions, SplitOutcome, Splitter};
