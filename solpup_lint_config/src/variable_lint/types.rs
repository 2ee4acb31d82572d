// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::Severity;
use serde::{Deserialize, Serialize};
use solpup_common::file_kind::FileKind;

/// Specifies how to match state and file-level variables for linting
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum VariableMatch {
    /// Match variables whose name matches this regex pattern
    NameRegex(String),
    /// Match `constant` variables
    Constant,
    /// Match `immutable` variables
    Immutable,
    /// Match variables declared in a contract whose name matches this pattern
    InContract(String),
    /// Match variables declared in files of this kind
    InFile(FileKind),
    /// Logical AND - both patterns must match
    AndMatches(Box<VariableMatch>, Box<VariableMatch>),
    /// Logical OR - either pattern must match
    OrMatches(Box<VariableMatch>, Box<VariableMatch>),
    /// Logical NOT - inverts the match
    NotMatch(Box<VariableMatch>),
}

/// A complete variable lint definition with matching criteria and rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableLint {
    pub name: String,
    pub matches: VariableMatch,
    pub rules: Vec<VariableRule>,
}

/// Rules that can be applied to variables matching specific criteria
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum VariableRule {
    /// Enforces that the variable name matches the specified pattern
    MustBeNamed(String, Severity),
    /// Enforces that the variable name does not match the specified pattern
    MustNotBeNamed(String, Severity),
}
