//! Foundation Layer - Core types shared by every modsplit crate
//!
//! This crate provides the foundational building blocks for modsplit:
//! - The error taxonomy used by the locator, extractor and orchestrator
//! - The module plan and import table that drive a split
//! - The serializable run report

pub mod error;
pub mod model;

// Re-export commonly used types for convenience
pub use error::*;
pub use model::*;
