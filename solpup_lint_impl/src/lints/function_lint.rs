// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::SourceLintRule;
use crate::helpers::pattern::{describe_pattern, string_matches_pattern};
use crate::lint_result::LintResult;
use crate::source::{ContractItem, FunctionItem, FunctionKind, SourceFile};
use solpup_common::file_kind::FileKind;
use solpup_lint_config::{FunctionMatch, FunctionRule, Severity};

pub struct FunctionLint {
    name: String,
    matches: FunctionMatch,
    rules: Vec<FunctionRule>,
}

impl FunctionLint {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(config: &solpup_lint_config::FunctionLint) -> Box<dyn SourceLintRule + Send> {
        Box::new(Self {
            name: config.name.clone(),
            matches: config.matches.clone(),
            rules: config.rules.clone(),
        })
    }

    // Evaluates a function match against a single declaration
    fn evaluate_match(
        m: &FunctionMatch,
        function: &FunctionItem,
        contract: Option<&ContractItem>,
        file_kind: FileKind,
    ) -> bool {
        match m {
            FunctionMatch::NameEquals(name) => function.name == *name,
            FunctionMatch::NameRegex(pattern) => string_matches_pattern(&function.name, pattern),
            FunctionMatch::InContract(pattern) => {
                contract.is_some_and(|c| string_matches_pattern(&c.name, pattern))
            }
            FunctionMatch::InFile(kind) => *kind == file_kind,
            FunctionMatch::HasVisibility(visibility) => function.visibility == Some(*visibility),
            FunctionMatch::AndMatches(left, right) => {
                Self::evaluate_match(left, function, contract, file_kind)
                    && Self::evaluate_match(right, function, contract, file_kind)
            }
            FunctionMatch::OrMatches(left, right) => {
                Self::evaluate_match(left, function, contract, file_kind)
                    || Self::evaluate_match(right, function, contract, file_kind)
            }
            FunctionMatch::NotMatch(inner) => {
                !Self::evaluate_match(inner, function, contract, file_kind)
            }
        }
    }

    fn violation(&self, function: &FunctionItem, rule: &FunctionRule) -> Option<(String, Severity)> {
        let noun = match function.kind {
            FunctionKind::Modifier => "Modifier",
            _ => "Function",
        };
        match rule {
            FunctionRule::MustBeNamed(pattern, severity)
                if !string_matches_pattern(&function.name, pattern) =>
            {
                Some((
                    format!(
                        "{noun} `{}` must match {} `{pattern}`",
                        function.name,
                        describe_pattern(pattern)
                    ),
                    *severity,
                ))
            }
            FunctionRule::MustNotBeNamed(pattern, severity)
                if string_matches_pattern(&function.name, pattern) =>
            {
                Some((
                    format!(
                        "{noun} `{}` must not match {} `{pattern}`",
                        function.name,
                        describe_pattern(pattern)
                    ),
                    *severity,
                ))
            }
            _ => None,
        }
    }
}

impl SourceLintRule for FunctionLint {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn applies_to_contract(&self, contract: &ContractItem, file_kind: FileKind) -> bool {
        contract
            .functions
            .iter()
            .any(|f| Self::evaluate_match(&self.matches, f, Some(contract), file_kind))
    }

    fn check(&self, source: &SourceFile) -> Vec<LintResult> {
        let mut results = Vec::new();
        for (contract, function) in source.all_functions() {
            if !Self::evaluate_match(&self.matches, function, contract, source.kind) {
                continue;
            }
            for rule in &self.rules {
                if let Some((message, severity)) = self.violation(function, rule) {
                    results.push(LintResult {
                        lint: "function_lint".to_string(),
                        lint_name: self.name.clone(),
                        file: source.display_path.clone(),
                        line: function.line,
                        item: function.name.clone(),
                        source_line: source.line(function.line).to_string(),
                        message,
                        severity,
                    });
                }
            }
        }
        results
    }
}
