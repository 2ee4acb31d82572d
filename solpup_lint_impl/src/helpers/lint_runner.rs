// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::LintCollection;
use crate::lint_result::LintResult;
use crate::source::SourceFile;
use solpup_common::project_context::{ContractInfo, ProjectContext};
use solpup_lint_config::Severity;
use std::fmt::Write;

///
/// The mode our lint runner should operate in
///
#[derive(Clone, PartialEq, Debug)]
pub enum Mode {
    /// Run the lints
    Check,

    /// Describe the contracts we found, and which lints apply to them
    PrintContracts,
}

/// What a run produced, depending on the mode
#[derive(Debug)]
pub enum RunOutput {
    Check(RunReport),
    PrintContracts(ProjectContext),
}

///
/// The results of checking a project.
///
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    /// Findings, ordered by file, then line, then lint
    pub results: Vec<LintResult>,

    /// How many source files were looked at
    pub files_checked: usize,
}

impl RunReport {
    /// True if any finding has `Error` severity
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// All findings as plain text, separated by blank lines
    pub fn to_text(&self) -> String {
        self.join(|r| r.to_string())
    }

    /// All findings, coloured for a terminal
    pub fn render(&self) -> String {
        self.join(LintResult::render)
    }

    /// A one line summary of the run
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Checked {} file{}",
            self.files_checked,
            if self.files_checked == 1 { "" } else { "s" }
        );
        if self.results.is_empty() {
            summary.push_str(", no issues found");
        } else {
            let _ = write!(
                summary,
                ": {} error(s), {} warning(s), {} info",
                self.count(Severity::Error),
                self.count(Severity::Warn),
                self.count(Severity::Info)
            );
        }
        summary
    }

    fn join(&self, f: impl Fn(&LintResult) -> String) -> String {
        self.results.iter().map(f).collect::<Vec<_>>().join("\n")
    }
}

///
/// Runs lints over parsed source files
///
pub struct LintRunner {
    lint_collection: LintCollection,
}

impl LintRunner {
    pub fn new(lint_collection: LintCollection) -> Self {
        LintRunner { lint_collection }
    }

    pub fn lint_collection(&self) -> &LintCollection {
        &self.lint_collection
    }

    /// Handles the different execution modes we have
    pub fn run(&self, mode: Mode, project_root: &str, sources: &[SourceFile]) -> RunOutput {
        match mode {
            Mode::Check => RunOutput::Check(self.check(sources)),
            Mode::PrintContracts => {
                RunOutput::PrintContracts(self.build_project_context(project_root, sources))
            }
        }
    }

    /// Runs every lint over every file
    pub fn check(&self, sources: &[SourceFile]) -> RunReport {
        let mut results: Vec<LintResult> = sources
            .iter()
            .flat_map(|source| {
                self.lint_collection
                    .lints()
                    .iter()
                    .flat_map(move |lint| lint.check(source))
            })
            .collect();

        results.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.line.cmp(&b.line))
                .then_with(|| a.lint_name.cmp(&b.lint_name))
        });

        RunReport {
            results,
            files_checked: sources.len(),
        }
    }

    /// Build ProjectContext: every contract we found, and the lints that apply to it
    pub fn build_project_context(&self, project_root: &str, sources: &[SourceFile]) -> ProjectContext {
        let lints = self.lint_collection.lints();

        let contracts = sources
            .iter()
            .flat_map(|source| {
                source.contracts.iter().map(move |contract| ContractInfo {
                    name: contract.name.clone(),
                    kind: contract.kind.to_string(),
                    file: source.display_path.clone(),
                    file_kind: source.kind,
                    functions: contract.functions.iter().map(|f| f.name.clone()).collect(),
                    applicable_lints: lints
                        .iter()
                        .filter(|lint| lint.applies_to_contract(contract, source.kind))
                        .map(|lint| lint.name())
                        .collect(),
                })
            })
            .collect();

        ProjectContext::with_data(project_root, contracts)
    }
}
