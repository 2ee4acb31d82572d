// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::SourceLintRule;
use crate::helpers::pattern::{describe_pattern, string_matches_pattern};
use crate::lint_result::LintResult;
use crate::source::{ContractItem, SourceFile, VariableItem, VariableMutability};
use solpup_common::file_kind::FileKind;
use solpup_lint_config::{VariableMatch, VariableRule};

pub struct VariableLint {
    name: String,
    matches: VariableMatch,
    rules: Vec<VariableRule>,
}

impl VariableLint {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(config: &solpup_lint_config::VariableLint) -> Box<dyn SourceLintRule + Send> {
        Box::new(Self {
            name: config.name.clone(),
            matches: config.matches.clone(),
            rules: config.rules.clone(),
        })
    }

    fn evaluate_match(
        m: &VariableMatch,
        variable: &VariableItem,
        contract: Option<&ContractItem>,
        file_kind: FileKind,
    ) -> bool {
        match m {
            VariableMatch::NameRegex(pattern) => string_matches_pattern(&variable.name, pattern),
            VariableMatch::Constant => variable.mutability == VariableMutability::Constant,
            VariableMatch::Immutable => variable.mutability == VariableMutability::Immutable,
            VariableMatch::InContract(pattern) => {
                contract.is_some_and(|c| string_matches_pattern(&c.name, pattern))
            }
            VariableMatch::InFile(kind) => *kind == file_kind,
            VariableMatch::AndMatches(left, right) => {
                Self::evaluate_match(left, variable, contract, file_kind)
                    && Self::evaluate_match(right, variable, contract, file_kind)
            }
            VariableMatch::OrMatches(left, right) => {
                Self::evaluate_match(left, variable, contract, file_kind)
                    || Self::evaluate_match(right, variable, contract, file_kind)
            }
            VariableMatch::NotMatch(inner) => {
                !Self::evaluate_match(inner, variable, contract, file_kind)
            }
        }
    }

    fn noun(variable: &VariableItem) -> &'static str {
        match variable.mutability {
            VariableMutability::Constant => "Constant",
            VariableMutability::Immutable => "Immutable",
            VariableMutability::Mutable => "Variable",
        }
    }

    fn result(&self, source: &SourceFile, variable: &VariableItem, rule: &VariableRule) -> Option<LintResult> {
        let (message, severity) = match rule {
            VariableRule::MustBeNamed(pattern, severity) => {
                if string_matches_pattern(&variable.name, pattern) {
                    return None;
                }
                (
                    format!(
                        "{} `{}` must match {} `{}`",
                        Self::noun(variable),
                        variable.name,
                        describe_pattern(pattern),
                        pattern
                    ),
                    *severity,
                )
            }
            VariableRule::MustNotBeNamed(pattern, severity) => {
                if !string_matches_pattern(&variable.name, pattern) {
                    return None;
                }
                (
                    format!(
                        "{} `{}` must not match {} `{}`",
                        Self::noun(variable),
                        variable.name,
                        describe_pattern(pattern),
                        pattern
                    ),
                    *severity,
                )
            }
        };

        Some(LintResult {
            lint: "variable_lint".to_string(),
            lint_name: self.name.clone(),
            file: source.display_path.clone(),
            line: variable.line,
            item: variable.name.clone(),
            source_line: source.line(variable.line).to_string(),
            message,
            severity,
        })
    }
}

impl SourceLintRule for VariableLint {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn applies_to_contract(&self, contract: &ContractItem, file_kind: FileKind) -> bool {
        contract
            .variables
            .iter()
            .any(|v| Self::evaluate_match(&self.matches, v, Some(contract), file_kind))
    }

    fn check(&self, source: &SourceFile) -> Vec<LintResult> {
        source
            .all_variables()
            .filter(|(contract, v)| Self::evaluate_match(&self.matches, v, *contract, source.kind))
            .flat_map(|(_, v)| self.rules.iter().filter_map(move |rule| self.result(source, v, rule)))
            .collect()
    }
}
