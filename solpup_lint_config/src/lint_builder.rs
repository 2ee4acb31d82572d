use ron::de::from_reader;
use ron::ser::{PrettyConfig, to_writer_pretty};
use serde::{Deserialize, Serialize};
use solpup_common::project_context::ProjectContext;
use std::fs::File;
use std::io;

use crate::{ConfiguredLint, ContractLint, FunctionLint, GenerateFromContext, VariableLint};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LintBuilder {
    pub lints: Vec<ConfiguredLint>,
}

impl LintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lint: ConfiguredLint) {
        self.lints.push(lint);
    }

    /// Returns a copy of the lints configured so far
    pub fn build(&self) -> Vec<ConfiguredLint> {
        self.lints.clone()
    }

    /// The built-in conventions, derived from what we know about the project
    pub fn generate_from_contexts(contexts: &[ProjectContext]) -> Self {
        let mut builder = Self::new();
        VariableLint::generate_from_contexts(contexts, &mut builder);
        FunctionLint::generate_from_contexts(contexts, &mut builder);
        ContractLint::generate_from_contexts(contexts, &mut builder);
        builder
    }

    /// The built-in conventions, for projects without a configuration file
    pub fn default_conventions() -> Self {
        Self::generate_from_contexts(&[])
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, PrettyConfig::default())
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    // Method to write the LintBuilder to a file
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        to_writer_pretty(file, self, PrettyConfig::default()).map_err(io::Error::other)?;
        Ok(())
    }

    // Method to read the LintBuilder from a file
    pub fn read_from_file<P: AsRef<std::path::Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;

        // Map ron::de::SpannedError to io::Error
        let builder: LintBuilder = from_reader(file).map_err(io::Error::other)?;

        Ok(builder)
    }
}
