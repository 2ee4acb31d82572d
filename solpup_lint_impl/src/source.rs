// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use anyhow::{Context, Result, anyhow};
use solang_parser::pt::{
    ContractDefinition, ContractPart, ContractTy, FunctionAttribute, FunctionDefinition,
    FunctionTy, Loc, SourceUnitPart, VariableAttribute, VariableDefinition,
};
use solpup_common::file_kind::{FileKind, line_text, offset_to_line};
use solpup_lint_config::{ContractKind, Visibility};
use std::fs;
use std::path::{Path, PathBuf};

/// What kind of function-like declaration this is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Function,
    Constructor,
    Fallback,
    Receive,
    Modifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableMutability {
    Mutable,
    Constant,
    Immutable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionItem {
    pub name: String,
    pub kind: FunctionKind,
    /// Explicit visibility, if one was written
    pub visibility: Option<Visibility>,
    pub line: usize,
}

impl FunctionItem {
    /// Callable from outside the contract. Modifiers are never entrypoints.
    pub fn is_externally_callable(&self) -> bool {
        match self.kind {
            FunctionKind::Modifier => false,
            _ => !self.visibility.is_some_and(Visibility::is_hidden),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableItem {
    pub name: String,
    pub mutability: VariableMutability,
    pub visibility: Option<Visibility>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractItem {
    pub name: String,
    pub kind: ContractKind,
    pub line: usize,
    pub functions: Vec<FunctionItem>,
    pub variables: Vec<VariableItem>,
}

/// A parsed Solidity file, reduced to the declarations our lints look at
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path used to read the file
    pub path: PathBuf,
    /// Path shown to the user, relative to the project root
    pub display_path: String,
    pub kind: FileKind,
    pub content: String,
    pub contracts: Vec<ContractItem>,
    /// Functions declared at file level
    pub free_functions: Vec<FunctionItem>,
    /// Constants declared at file level
    pub free_variables: Vec<VariableItem>,
}

impl SourceFile {
    /// Reads and parses the file at `path`
    pub fn load(path: impl AsRef<Path>, display_path: impl Into<String>, kind: FileKind) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .context(format!("Failed to read Solidity file: {}", path.display()))?;
        let mut source = Self::parse(display_path, kind, content)?;
        source.path = path.to_path_buf();
        Ok(source)
    }

    /// Parses Solidity source text. Syntax errors are reported with their line numbers.
    pub fn parse(display_path: impl Into<String>, kind: FileKind, content: impl Into<String>) -> Result<Self> {
        let display_path = display_path.into();
        let content = content.into();

        let (pt, _comments) = solang_parser::parse(&content, 0).map_err(|diagnostics| {
            let details: Vec<String> = diagnostics
                .iter()
                .map(|d| format!("  line {}: {}", offset_to_line(&content, loc_start(&d.loc)), d.message))
                .collect();
            anyhow!("Failed to parse {}:\n{}", display_path, details.join("\n"))
        })?;

        let mut source = SourceFile {
            path: PathBuf::from(&display_path),
            display_path,
            kind,
            contracts: Vec::new(),
            free_functions: Vec::new(),
            free_variables: Vec::new(),
            content: String::new(),
        };

        for part in &pt.0 {
            match part {
                SourceUnitPart::ContractDefinition(c) => {
                    source.contracts.push(contract_item(&content, c));
                }
                SourceUnitPart::FunctionDefinition(f) => {
                    source.free_functions.push(function_item(&content, f));
                }
                SourceUnitPart::VariableDefinition(v) => {
                    source.free_variables.push(variable_item(&content, v));
                }
                _ => (),
            }
        }

        source.content = content;
        Ok(source)
    }

    /// The text of a 1-based source line
    pub fn line(&self, line: usize) -> &str {
        line_text(&self.content, line)
    }

    /// Every function in the file, paired with the contract declaring it
    pub fn all_functions(&self) -> impl Iterator<Item = (Option<&ContractItem>, &FunctionItem)> {
        self.free_functions
            .iter()
            .map(|f| (None, f))
            .chain(
                self.contracts
                    .iter()
                    .flat_map(|c| c.functions.iter().map(move |f| (Some(c), f))),
            )
    }

    /// Every variable in the file, paired with the contract declaring it
    pub fn all_variables(&self) -> impl Iterator<Item = (Option<&ContractItem>, &VariableItem)> {
        self.free_variables
            .iter()
            .map(|v| (None, v))
            .chain(
                self.contracts
                    .iter()
                    .flat_map(|c| c.variables.iter().map(move |v| (Some(c), v))),
            )
    }
}

fn loc_start(loc: &Loc) -> usize {
    match loc {
        Loc::File(_, start, _) => *start,
        _ => 0,
    }
}

fn line_of(content: &str, loc: &Loc) -> usize {
    offset_to_line(content, loc_start(loc))
}

fn visibility_of(v: &solang_parser::pt::Visibility) -> Visibility {
    use solang_parser::pt::Visibility as Pt;
    match v {
        Pt::External(_) => Visibility::External,
        Pt::Public(_) => Visibility::Public,
        Pt::Internal(_) => Visibility::Internal,
        Pt::Private(_) => Visibility::Private,
    }
}

fn contract_item(content: &str, c: &ContractDefinition) -> ContractItem {
    let kind = match c.ty {
        ContractTy::Abstract(_) => ContractKind::Abstract,
        ContractTy::Contract(_) => ContractKind::Contract,
        ContractTy::Interface(_) => ContractKind::Interface,
        ContractTy::Library(_) => ContractKind::Library,
    };

    let mut item = ContractItem {
        name: c
            .name
            .as_ref()
            .map(|n| n.name.clone())
            .unwrap_or_else(|| "<unnamed>".to_string()),
        kind,
        line: line_of(content, &c.loc),
        functions: Vec::new(),
        variables: Vec::new(),
    };

    for part in &c.parts {
        match part {
            ContractPart::FunctionDefinition(f) => item.functions.push(function_item(content, f)),
            ContractPart::VariableDefinition(v) => item.variables.push(variable_item(content, v)),
            _ => (),
        }
    }
    item
}

fn function_item(content: &str, f: &FunctionDefinition) -> FunctionItem {
    let (kind, name) = match f.ty {
        FunctionTy::Constructor => (FunctionKind::Constructor, "constructor".to_string()),
        FunctionTy::Fallback => (FunctionKind::Fallback, "fallback".to_string()),
        FunctionTy::Receive => (FunctionKind::Receive, "receive".to_string()),
        FunctionTy::Function | FunctionTy::Modifier => {
            let kind = if matches!(f.ty, FunctionTy::Modifier) {
                FunctionKind::Modifier
            } else {
                FunctionKind::Function
            };
            let name = f
                .name
                .as_ref()
                .map(|n| n.name.clone())
                .unwrap_or_else(|| "<unnamed>".to_string());
            (kind, name)
        }
    };

    let visibility = f.attributes.iter().find_map(|a| match a {
        FunctionAttribute::Visibility(v) => Some(visibility_of(v)),
        _ => None,
    });

    FunctionItem {
        name,
        kind,
        visibility,
        line: line_of(content, &f.loc),
    }
}

fn variable_item(content: &str, v: &VariableDefinition) -> VariableItem {
    let mut mutability = VariableMutability::Mutable;
    let mut visibility = None;
    for attr in &v.attrs {
        match attr {
            VariableAttribute::Constant(_) => mutability = VariableMutability::Constant,
            VariableAttribute::Immutable(_) => mutability = VariableMutability::Immutable,
            VariableAttribute::Visibility(vis) => visibility = Some(visibility_of(vis)),
            _ => (),
        }
    }

    VariableItem {
        name: v
            .name
            .as_ref()
            .map(|n| n.name.clone())
            .unwrap_or_else(|| "<unnamed>".to_string()),
        mutability,
        visibility,
        line: line_of(content, &v.loc),
    }
}
