use crate::{Severity, Visibility};
use serde::{Deserialize, Serialize};
use solpup_common::file_kind::FileKind;

/// Specifies how to match functions for linting
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum FunctionMatch {
    /// Match functions with exactly this name
    NameEquals(String),
    /// Match functions whose name matches this regex pattern
    NameRegex(String),
    /// Match functions inside a contract whose name matches this pattern
    InContract(String),
    /// Match functions declared in files of this kind
    InFile(FileKind),
    /// Match functions with an explicit visibility
    HasVisibility(Visibility),
    /// Logical AND - both patterns must match
    AndMatches(Box<FunctionMatch>, Box<FunctionMatch>),
    /// Logical OR - either pattern must match
    OrMatches(Box<FunctionMatch>, Box<FunctionMatch>),
    /// Logical NOT - inverts the match
    NotMatch(Box<FunctionMatch>),
}

/// A complete function lint definition with matching criteria and rules
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FunctionLint {
    pub name: String,
    pub matches: FunctionMatch,
    pub rules: Vec<FunctionRule>,
}

/// Rules that can be applied to functions matching specific criteria
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum FunctionRule {
    /// Enforces that the function name matches the specified pattern
    MustBeNamed(String, Severity),
    /// Enforces that the function name does not match the specified pattern
    MustNotBeNamed(String, Severity),
}
