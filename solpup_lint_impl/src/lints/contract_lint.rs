// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::SourceLintRule;
use crate::helpers::pattern::{describe_pattern, string_matches_pattern};
use crate::lint_result::LintResult;
use crate::source::{ContractItem, SourceFile};
use solpup_common::file_kind::FileKind;
use solpup_lint_config::{ContractKind, ContractMatch, ContractRule, Severity};

pub struct ContractLint {
    name: String,
    matches: ContractMatch,
    rules: Vec<ContractRule>,
}

impl ContractLint {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(config: &solpup_lint_config::ContractLint) -> Box<dyn SourceLintRule + Send> {
        Box::new(Self {
            name: config.name.clone(),
            matches: config.matches.clone(),
            rules: config.rules.clone(),
        })
    }

    fn evaluate_match(m: &ContractMatch, contract: &ContractItem, file_kind: FileKind) -> bool {
        match m {
            ContractMatch::NameRegex(pattern) => string_matches_pattern(&contract.name, pattern),
            ContractMatch::InFile(kind) => *kind == file_kind,
            ContractMatch::OfKind(kind) => contract.kind == *kind,
            ContractMatch::AndMatches(left, right) => {
                Self::evaluate_match(left, contract, file_kind)
                    && Self::evaluate_match(right, contract, file_kind)
            }
            ContractMatch::OrMatches(left, right) => {
                Self::evaluate_match(left, contract, file_kind)
                    || Self::evaluate_match(right, contract, file_kind)
            }
            ContractMatch::NotMatch(inner) => !Self::evaluate_match(inner, contract, file_kind),
        }
    }

    // What a match says about a file with no contracts in it. Only `InFile` can
    // be decided, everything else is unknown (`None`).
    fn evaluate_file_match(m: &ContractMatch, file_kind: FileKind) -> Option<bool> {
        match m {
            ContractMatch::InFile(kind) => Some(*kind == file_kind),
            ContractMatch::NameRegex(_) | ContractMatch::OfKind(_) => None,
            ContractMatch::AndMatches(left, right) => {
                match (
                    Self::evaluate_file_match(left, file_kind),
                    Self::evaluate_file_match(right, file_kind),
                ) {
                    (Some(false), _) | (_, Some(false)) => Some(false),
                    (Some(true), Some(true)) => Some(true),
                    _ => None,
                }
            }
            ContractMatch::OrMatches(left, right) => {
                match (
                    Self::evaluate_file_match(left, file_kind),
                    Self::evaluate_file_match(right, file_kind),
                ) {
                    (Some(true), _) | (_, Some(true)) => Some(true),
                    (Some(false), Some(false)) => Some(false),
                    _ => None,
                }
            }
            ContractMatch::NotMatch(inner) => {
                Self::evaluate_file_match(inner, file_kind).map(|matched| !matched)
            }
        }
    }

    fn noun(kind: ContractKind) -> &'static str {
        match kind {
            ContractKind::Contract => "Contract",
            ContractKind::Abstract => "Abstract contract",
            ContractKind::Interface => "Interface",
            ContractKind::Library => "Library",
        }
    }

    fn contract_result(
        &self,
        source: &SourceFile,
        contract: &ContractItem,
        message: String,
        severity: Severity,
    ) -> LintResult {
        LintResult {
            lint: "contract_lint".to_string(),
            lint_name: self.name.clone(),
            file: source.display_path.clone(),
            line: contract.line,
            item: contract.name.clone(),
            source_line: source.line(contract.line).to_string(),
            message,
            severity,
        }
    }

    // The entrypoint rule looks at every matched contract in the file together,
    // so a script split over several contracts still has exactly one `run`. A
    // file the lint targets by kind is checked even if it declares no contract.
    fn check_entrypoint(
        &self,
        source: &SourceFile,
        matched: &[&ContractItem],
        entrypoint: &str,
        ignored: &[String],
        severity: Severity,
    ) -> Option<LintResult> {
        if matched.is_empty()
            && Self::evaluate_file_match(&self.matches, source.kind) != Some(true)
        {
            return None;
        }

        let public_methods: Vec<&str> = matched
            .iter()
            .flat_map(|c| c.functions.iter())
            .filter(|f| f.is_externally_callable())
            .filter(|f| !ignored.contains(&f.name))
            .map(|f| f.name.as_str())
            .collect();

        let message = match public_methods.as_slice() {
            [] => format!("No `{entrypoint}` method found"),
            [only] if *only == entrypoint => return None,
            [_] => format!("The only public method must be named `{entrypoint}`"),
            _ => {
                let subject = if source.kind == FileKind::Script {
                    "Scripts"
                } else {
                    "Contracts"
                };
                let excluding: Vec<String> = ignored
                    .iter()
                    .filter(|name| name.as_str() != "constructor")
                    .map(|name| format!("`{name}`"))
                    .collect();
                let excluding = if excluding.is_empty() {
                    String::new()
                } else {
                    format!(" (excluding {})", excluding.join(", "))
                };
                format!(
                    "{subject} must have a single public method named `{entrypoint}`{excluding}, but the following methods were found: {public_methods:?}"
                )
            }
        };

        Some(LintResult {
            lint: "contract_lint".to_string(),
            lint_name: self.name.clone(),
            file: source.display_path.clone(),
            line: 0,
            item: matched.first().map(|c| c.name.clone()).unwrap_or_default(),
            source_line: String::new(),
            message,
            severity,
        })
    }
}

impl SourceLintRule for ContractLint {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn applies_to_contract(&self, contract: &ContractItem, file_kind: FileKind) -> bool {
        Self::evaluate_match(&self.matches, contract, file_kind)
    }

    fn check(&self, source: &SourceFile) -> Vec<LintResult> {
        let matched: Vec<&ContractItem> = source
            .contracts
            .iter()
            .filter(|c| Self::evaluate_match(&self.matches, c, source.kind))
            .collect();

        let mut results = Vec::new();
        for rule in &self.rules {
            match rule {
                ContractRule::MustBeNamed(pattern, severity) => {
                    for contract in matched.iter().filter(|c| !string_matches_pattern(&c.name, pattern)) {
                        let message = format!(
                            "{} `{}` must match {} `{}`",
                            Self::noun(contract.kind),
                            contract.name,
                            describe_pattern(pattern),
                            pattern
                        );
                        results.push(self.contract_result(source, contract, message, *severity));
                    }
                }
                ContractRule::MustNotBeNamed(pattern, severity) => {
                    for contract in matched.iter().filter(|c| string_matches_pattern(&c.name, pattern)) {
                        let message = format!(
                            "{} `{}` must not match {} `{}`",
                            Self::noun(contract.kind),
                            contract.name,
                            describe_pattern(pattern),
                            pattern
                        );
                        results.push(self.contract_result(source, contract, message, *severity));
                    }
                }
                ContractRule::SingleEntrypoint {
                    entrypoint,
                    ignored,
                    severity,
                } => {
                    results.extend(self.check_entrypoint(source, &matched, entrypoint, ignored, *severity));
                }
            }
        }
        results
    }
}
