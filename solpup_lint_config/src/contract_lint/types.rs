// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::{ContractKind, Severity};
use serde::{Deserialize, Serialize};
use solpup_common::file_kind::FileKind;

/// Specifies how to match contracts, interfaces and libraries for linting
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum ContractMatch {
    /// Match contracts whose name matches this regex pattern
    NameRegex(String),
    /// Match contracts declared in files of this kind
    InFile(FileKind),
    /// Match declarations of this kind
    OfKind(ContractKind),
    /// Logical AND - both patterns must match
    AndMatches(Box<ContractMatch>, Box<ContractMatch>),
    /// Logical OR - either pattern must match
    OrMatches(Box<ContractMatch>, Box<ContractMatch>),
    /// Logical NOT - inverts the match
    NotMatch(Box<ContractMatch>),
}

/// A complete contract lint definition with matching criteria and rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractLint {
    pub name: String,
    pub matches: ContractMatch,
    pub rules: Vec<ContractRule>,
}

/// Rules that can be applied to contracts matching specific criteria
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum ContractRule {
    /// Enforces that the contract name matches the specified pattern
    MustBeNamed(String, Severity),
    /// Enforces that the contract name does not match the specified pattern
    MustNotBeNamed(String, Severity),
    /// Across all matched contracts in a file, exactly one externally callable
    /// function may exist and it must be called `entrypoint`. Functions named in
    /// `ignored` don't count.
    SingleEntrypoint {
        entrypoint: String,
        ignored: Vec<String>,
        severity: Severity,
    },
}
