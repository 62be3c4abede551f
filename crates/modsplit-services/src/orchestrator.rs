//! Split orchestration
//!
//! Runs a module plan against one source file:
//! 1. Back up the source (byte-identical copy)
//! 2. Read it once and thread the buffer through every extraction
//! 3. Render and write one file per module that received definitions
//! 4. Insert `mod`/`use` declarations and overwrite the source
//!
//! Per-name misses are recorded in the report and never abort the run. A
//! missing source, a failed backup or an unreadable source abort before
//! anything is mutated.

use modsplit_config::AppConfig;
use modsplit_foundation::{
    DefinitionKind, FileRole, FileWrite, ImportTable, ItemOutcome, ModulePlan, ModuleReport,
    SplitError, SplitReport, SplitResult, WriteStatus,
};
use modsplit_lang_rust::{
    build_module_content, extract_function, extract_struct_and_impls, insert_declarations,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Where to read from and write to
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub source: PathBuf,
    pub anchor: String,
    pub backup_suffix: String,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl SplitOptions {
    /// Options for `source` with the default anchor and backup suffix
    pub fn new(source: impl Into<PathBuf>) -> Self {
        use modsplit_config::defaults::{DEFAULT_ANCHOR, DEFAULT_BACKUP_SUFFIX};

        Self {
            source: source.into(),
            anchor: DEFAULT_ANCHOR.to_string(),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            output_dir: None,
            dry_run: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            source: config.source.path.clone(),
            anchor: config.source.anchor.clone(),
            backup_suffix: config.source.backup_suffix.clone(),
            output_dir: config.source.output_dir.clone(),
            dry_run: false,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// `<source><backup_suffix>`
    pub fn backup_path(&self) -> PathBuf {
        let mut path = self.source.clone().into_os_string();
        path.push(&self.backup_suffix);
        PathBuf::from(path)
    }

    /// Explicit output directory, or the directory holding the source
    /// (empty for a bare file name, meaning the working directory)
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    /// Path of the file generated for `module`
    pub fn module_path(&self, module: &str) -> PathBuf {
        self.output_dir().join(format!("{module}.rs"))
    }
}

/// Fragments extracted for one module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleResult {
    pub name: String,
    pub fragments: Vec<String>,
    pub outcomes: Vec<ItemOutcome>,
}

impl ModuleResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn found(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_found()).count()
    }

    pub fn requested(&self) -> usize {
        self.outcomes.len()
    }
}

/// Buffer left after running a plan, plus what each module received
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub remaining: String,
    pub modules: Vec<ModuleResult>,
}

/// Run every extraction in `plan` against `buffer`, in plan order.
///
/// Pure text transformation: no I/O. Each successful extraction replaces the
/// buffer with its `remaining` text; a miss leaves it untouched.
pub fn split_buffer(buffer: String, plan: &[ModulePlan]) -> SplitResult<SplitOutcome> {
    let mut remaining = buffer;
    let mut modules = Vec::with_capacity(plan.len());

    for module in plan {
        let (next, result) = extract_module(remaining, module)?;
        remaining = next;
        info!(
            module = %result.name,
            found = result.found(),
            requested = result.requested(),
            fragments = result.fragments.len(),
            "Module processed"
        );
        modules.push(result);
    }

    Ok(SplitOutcome { remaining, modules })
}

fn extract_module(mut buffer: String, module: &ModulePlan) -> SplitResult<(String, ModuleResult)> {
    let mut result = ModuleResult::new(&module.name);
    result.outcomes.reserve(module.requested());

    for name in &module.functions {
        match extract_function(&buffer, name) {
            Ok(extraction) => {
                info!(module = %module.name, function = %name, "Extracted function");
                result.fragments.push(extraction.text);
                result
                    .outcomes
                    .push(ItemOutcome::extracted(DefinitionKind::Function, name, 1));
                buffer = extraction.remaining;
            }
            Err(e) => result.outcomes.push(miss(&module.name, name, e)?),
        }
    }

    for name in &module.structs {
        match extract_struct_and_impls(&buffer, name) {
            Ok(extraction) => {
                info!(
                    module = %module.name,
                    struct_name = %name,
                    blocks = extraction.blocks.len(),
                    "Extracted struct"
                );
                result.outcomes.push(ItemOutcome::extracted(
                    DefinitionKind::Struct,
                    name,
                    extraction.blocks.len(),
                ));
                result.fragments.extend(extraction.blocks);
                buffer = extraction.remaining;
            }
            Err(e) => result.outcomes.push(miss(&module.name, name, e)?),
        }
    }

    Ok((buffer, result))
}

/// Turn a recoverable extraction error into an outcome; pass anything else up
fn miss(module: &str, name: &str, err: SplitError) -> SplitResult<ItemOutcome> {
    if !err.is_recoverable() {
        return Err(err);
    }
    warn!(module = %module, name = %name, error = %err, "Definition not extracted");

    Ok(match err {
        SplitError::ExtractionTruncated { kind, .. } => ItemOutcome::truncated(kind, name),
        SplitError::DefinitionNotFound { kind, .. } => ItemOutcome::not_found(kind, name),
        other => return Err(other),
    })
}

/// Applies a module plan to a source file on disk
#[derive(Debug, Clone)]
pub struct Splitter {
    options: SplitOptions,
    imports: ImportTable,
}

impl Splitter {
    pub fn new(options: SplitOptions, imports: ImportTable) -> Self {
        Self { options, imports }
    }

    /// Run `plan` against the configured source file
    pub fn run(&self, plan: &[ModulePlan]) -> SplitResult<SplitReport> {
        let source = &self.options.source;
        if !source.is_file() {
            return Err(SplitError::config(format!(
                "Source file not found: {}",
                source.display()
            )));
        }

        if let Some(module) = plan
            .iter()
            .find(|m| self.options.module_path(&m.name) == *source)
        {
            return Err(SplitError::config(format!(
                "Module '{}' would be written over the source file {}",
                module.name,
                source.display()
            )));
        }

        info!(
            source = %source.display(),
            modules = plan.len(),
            dry_run = self.options.dry_run,
            "Starting split"
        );

        let mut report = SplitReport::new(source, self.options.dry_run);

        let backup = self.options.backup_path();
        let status = if self.options.dry_run {
            WriteStatus::Planned
        } else {
            fs::copy(source, &backup).map_err(|e| SplitError::io(&backup, e))?;
            info!(backup = %backup.display(), "Backup created");
            WriteStatus::Written
        };
        report
            .files
            .push(FileWrite::new(&backup, FileRole::Backup, status));
        report.backup = Some(backup);

        let original = fs::read_to_string(source).map_err(|e| SplitError::io(source, e))?;
        let outcome = split_buffer(original, plan)?;

        let mut declared = Vec::new();
        let mut module_write_failed = false;

        for (module, result) in plan.iter().zip(outcome.modules) {
            let mut module_report = ModuleReport {
                name: result.name.clone(),
                fragments: result.fragments.len(),
                outcomes: result.outcomes,
                file: None,
            };

            if result.fragments.is_empty() {
                debug!(module = %result.name, "Nothing extracted, no module file");
                report.modules.push(module_report);
                continue;
            }

            let path = self.options.module_path(&result.name);
            let content =
                build_module_content(&result.name, &result.fragments, &self.imports, &module.imports);
            let status = self.write_file(&path, &content);

            if matches!(status, WriteStatus::Failed { .. }) {
                module_write_failed = true;
            } else {
                declared.push(result.name.clone());
                module_report.file = Some(path.clone());
            }

            report
                .files
                .push(FileWrite::new(path, FileRole::Module, status));
            report.modules.push(module_report);
        }

        let status = if module_write_failed {
            warn!(
                source = %source.display(),
                "A module file could not be written, leaving the source untouched"
            );
            WriteStatus::Skipped {
                reason: "a module file could not be written".to_string(),
            }
        } else {
            let rewritten = insert_declarations(&outcome.remaining, &self.options.anchor, &declared);
            self.write_file(source, &rewritten)
        };
        report
            .files
            .push(FileWrite::new(source, FileRole::Source, status));

        info!(
            found = report.total_found(),
            module_files = report.module_files().count(),
            requested = report.total_requested(),
            success = report.is_success(),
            "Split complete"
        );
        Ok(report)
    }

    /// Write a fully rendered file, creating its directory when needed
    fn write_file(&self, path: &Path, content: &str) -> WriteStatus {
        if self.options.dry_run {
            debug!(path = %path.display(), bytes = content.len(), "Dry run, not writing");
            return WriteStatus::Planned;
        }

        let result = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => fs::create_dir_all(parent),
            None => Ok(()),
        }
        .and_then(|()| fs::write(path, content));

        match result {
            Ok(()) => {
                info!(path = %path.display(), bytes = content.len(), "File written");
                WriteStatus::Written
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to write file");
                WriteStatus::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
