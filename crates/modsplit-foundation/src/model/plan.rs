//! Module plan and import table
//!
//! A plan is an ordered list of [`ModulePlan`] entries. Order matters: modules
//! are processed in plan order and, inside a module, names are extracted in the
//! order they are listed, each extraction working on the buffer left behind by
//! the previous one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of top-level definition being located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    /// A free function (`fn name(..) { .. }`)
    Function,
    /// A braced struct together with its inherent impl blocks
    Struct,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Struct => write!(f, "struct"),
        }
    }
}

/// Which definitions go into one target module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePlan {
    /// Module name; also the output file stem
    pub name: String,
    /// Function names, extracted in listed order
    #[serde(default)]
    pub functions: Vec<String>,
    /// Struct names, extracted (with their impl blocks) in listed order
    #[serde(default)]
    pub structs: Vec<String>,
    /// Extra import lines for this module only
    #[serde(default)]
    pub imports: Vec<String>,
}

impl ModulePlan {
    /// Create an empty plan entry for `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add function names to extract
    pub fn with_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions.extend(functions.into_iter().map(Into::into));
        self
    }

    /// Add struct names to extract
    pub fn with_structs<I, S>(mut self, structs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.structs.extend(structs.into_iter().map(Into::into));
        self
    }

    /// Add extra import lines
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// Number of names requested by this entry
    pub fn requested(&self) -> usize {
        self.functions.len() + self.structs.len()
    }
}

/// Import declarations emitted at the top of generated modules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTable {
    /// Lines present in every generated module
    #[serde(default)]
    pub global: Vec<String>,
    /// Lines keyed by module name; unknown modules only get `global`
    #[serde(default)]
    pub modules: BTreeMap<String, Vec<String>>,
}

impl ImportTable {
    /// Module-specific lines, empty for unrecognized module names
    pub fn for_module(&self, module_name: &str) -> &[String] {
        self.modules
            .get(module_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
