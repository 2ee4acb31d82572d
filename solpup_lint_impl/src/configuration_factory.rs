use crate::SourceLintRule;
use crate::lints::{ContractLint, FunctionLint, VariableLint};
use anyhow::{Context, Result};
use solpup_lint_config::{ConfiguredLint, LintBuilder};
use std::fs;
use std::path::Path;

/// Turns lint configuration into runnable lints
pub struct LintConfigurationFactory;

impl LintConfigurationFactory {
    /// Loads lints from a RON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Box<dyn SourceLintRule + Send>>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lint configuration {}", path.display()))?;
        Self::from_content(&content)
            .with_context(|| format!("Invalid lint configuration in {}", path.display()))
    }

    /// Loads lints from RON configuration text
    pub fn from_content(content: &str) -> Result<Vec<Box<dyn SourceLintRule + Send>>> {
        let builder = LintBuilder::from_ron_str(content).context("Failed to parse as RON")?;
        Ok(Self::from_builder(&builder))
    }

    pub fn from_builder(builder: &LintBuilder) -> Vec<Box<dyn SourceLintRule + Send>> {
        builder
            .lints
            .iter()
            .map(|l| match l {
                ConfiguredLint::Variable(v) => VariableLint::new(v),
                ConfiguredLint::Function(f) => FunctionLint::new(f),
                ConfiguredLint::Contract(c) => ContractLint::new(c),
            })
            .collect()
    }
}
