//! Core data structures for planning and reporting a split

pub mod plan;
pub mod report;

pub use plan::{DefinitionKind, ImportTable, ModulePlan};
pub use report::{FileRole, FileWrite, ItemOutcome, ItemStatus, ModuleReport, SplitReport, WriteStatus};
