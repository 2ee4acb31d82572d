// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

pub mod contract_lint;
pub mod function_lint;
pub mod lint_builder;
pub mod variable_lint;

// Make sure our extensions are visible
pub use contract_lint::{
    ContractLint, ContractLintExt, ContractMatch, ContractMatchNode, ContractMatcher,
    ContractRule,
};
pub use function_lint::{
    FunctionLint, FunctionLintExt, FunctionMatch, FunctionMatchNode, FunctionMatcher,
    FunctionRule,
};
pub use lint_builder::LintBuilder;
pub use solpup_common::file_kind::FileKind;
pub use variable_lint::{
    VariableLint, VariableLintExt, VariableMatch, VariableMatchNode, VariableMatcher,
    VariableRule,
};

use serde::{Deserialize, Serialize};
use solpup_common::project_context::ProjectContext;
use std::fmt;

/// Constants and immutables: upper case, digits, `_` and `$` only, with at
/// least one upper case letter or digit.
pub const CONSTANT_NAME_PATTERN: &str = r"^(?:[$_]*[A-Z0-9][$_]*){1,}$";

/// Test functions: `test`, optional `Fork`/`Fuzz`, optional revert
/// qualifier, then an underscore-separated description.
pub const TEST_NAME_PATTERN: &str = r"^test(Fork)?(Fuzz)?(_Revert(If|When|On))?_(\w+)*$";

/// Internal and private functions must start with an underscore.
pub const INTERNAL_FUNCTION_PATTERN: &str = r"^_";

/// Severity levels for lint results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    Info,
    Warn,
    #[default]
    Error,
}

/// Solidity visibility of a function or variable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Visibility {
    External,
    Public,
    Internal,
    Private,
}

impl Visibility {
    /// Internal and private members can't be called from outside the contract
    pub fn is_hidden(self) -> bool {
        matches!(self, Visibility::Internal | Visibility::Private)
    }
}

/// The flavour of a contract-like declaration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Contract,
    Abstract,
    Interface,
    Library,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractKind::Contract => "contract",
            ContractKind::Abstract => "abstract contract",
            ContractKind::Interface => "interface",
            ContractKind::Library => "library",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConfiguredLint {
    Variable(VariableLint),
    Function(FunctionLint),
    Contract(ContractLint),
}

impl ConfiguredLint {
    /// The user supplied name of the lint
    pub fn name(&self) -> &str {
        match self {
            ConfiguredLint::Variable(l) => &l.name,
            ConfiguredLint::Function(l) => &l.name,
            ConfiguredLint::Contract(l) => &l.name,
        }
    }
}

/// Implemented by each lint type to contribute its default lints to a
/// generated configuration.
pub trait GenerateFromContext {
    fn generate_from_contexts(contexts: &[ProjectContext], builder: &mut LintBuilder);
}

// A convention scoped to one kind of file is only generated when the project
// has contracts in such files. With no contracts at all, everything is.
pub(crate) fn contexts_cover(contexts: &[ProjectContext], kind: FileKind) -> bool {
    if contexts.iter().all(|c| c.contracts.is_empty()) {
        return true;
    }
    contexts.iter().any(|c| c.contracts_of_kind(kind).next().is_some())
}
