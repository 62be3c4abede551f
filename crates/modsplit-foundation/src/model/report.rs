//! Run report produced by the orchestrator

use super::plan::DefinitionKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one requested name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    /// Extracted into `blocks` fragments (a struct counts its impl blocks)
    Extracted { blocks: usize },
    /// No textual match
    NotFound,
    /// Matched, but no closing brace before end of input
    Truncated,
}

/// Outcome for a single requested function or struct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub name: String,
    pub kind: DefinitionKind,
    #[serde(flatten)]
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn extracted(kind: DefinitionKind, name: impl Into<String>, blocks: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            status: ItemStatus::Extracted { blocks },
        }
    }

    pub fn not_found(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            status: ItemStatus::NotFound,
        }
    }

    pub fn truncated(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            status: ItemStatus::Truncated,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.status, ItemStatus::Extracted { .. })
    }
}

/// Per-module section of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReport {
    pub name: String,
    pub outcomes: Vec<ItemOutcome>,
    /// Number of text fragments extracted for this module
    pub fragments: usize,
    /// Output file, when one was produced (or planned, in a dry run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl ModuleReport {
    /// Number of requested names that were extracted
    pub fn found(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_found()).count()
    }

    /// Number of names the plan asked for
    pub fn requested(&self) -> usize {
        self.outcomes.len()
    }
}

/// Which file a write belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Backup,
    Module,
    Source,
}

/// Result of one file write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteStatus {
    Written,
    /// Dry run: the write would have happened
    Planned,
    Failed { error: String },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileWrite {
    pub path: PathBuf,
    pub role: FileRole,
    #[serde(flatten)]
    pub status: WriteStatus,
}

impl FileWrite {
    pub fn new(path: impl Into<PathBuf>, role: FileRole, status: WriteStatus) -> Self {
        Self {
            path: path.into(),
            role,
            status,
        }
    }
}

/// Full report of a split run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub source: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    pub dry_run: bool,
    pub modules: Vec<ModuleReport>,
    pub files: Vec<FileWrite>,
}

impl SplitReport {
    pub fn new(source: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            source: source.into(),
            backup: None,
            dry_run,
            modules: Vec::new(),
            files: Vec::new(),
        }
    }

    /// True when no write failed or had to be skipped
    pub fn is_success(&self) -> bool {
        self.files.iter().all(|f| {
            matches!(f.status, WriteStatus::Written | WriteStatus::Planned)
        })
    }

    /// Total names extracted across all modules
    pub fn total_found(&self) -> usize {
        self.modules.iter().map(ModuleReport::found).sum()
    }

    /// Total names requested across all modules
    pub fn total_requested(&self) -> usize {
        self.modules.iter().map(ModuleReport::requested).sum()
    }

    /// Module files that were written (or planned, in a dry run)
    pub fn module_files(&self) -> impl Iterator<Item = &FileWrite> {
        self.files.iter().filter(|f| {
            f.role == FileRole::Module
                && matches!(f.status, WriteStatus::Written | WriteStatus::Planned)
        })
    }
}
