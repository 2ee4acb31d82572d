use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::file_kind::FileKind;

/// Information about a contract and the lints that apply to it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContractInfo {
    /// Contract name as declared
    pub name: String,
    /// `contract`, `abstract contract`, `interface` or `library`
    pub kind: String,
    /// Path of the declaring file, relative to the project root
    pub file: String,
    /// Kind of the declaring file
    pub file_kind: FileKind,
    /// Names of the functions declared in the contract, in source order
    #[serde(default)]
    pub functions: Vec<String>,
    /// List of lint names that apply to this contract
    #[serde(default)]
    pub applicable_lints: Vec<String>,
}

// Allow comparing directly against contract names
impl PartialEq<str> for ContractInfo {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for ContractInfo {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// Discoverable context about the project we're running solpup on. Used to
/// print the project structure and to seed generated configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProjectContext {
    /// The project root, as given on the command line
    pub project_root: String,
    /// All contracts found in the project
    pub contracts: Vec<ContractInfo>,
}

impl ProjectContext {
    /// Creates a new empty project context
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(project_root: impl Into<String>, contracts: Vec<ContractInfo>) -> Self {
        let mut context = Self {
            project_root: project_root.into(),
            contracts,
        };
        context.sort();
        context
    }

    /// Contracts declared in files of the given kind
    pub fn contracts_of_kind(&self, kind: FileKind) -> impl Iterator<Item = &ContractInfo> {
        self.contracts.iter().filter(move |c| c.file_kind == kind)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize ProjectContext to JSON")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse ProjectContext from JSON")
    }

    /// Sorts contracts by file, then name, for consistent ordering
    fn sort(&mut self) {
        self.contracts
            .sort_by(|a, b| a.file.cmp(&b.file).then_with(|| a.name.cmp(&b.name)));
    }
}
