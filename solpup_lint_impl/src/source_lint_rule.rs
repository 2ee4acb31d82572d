use crate::lint_result::LintResult;
use crate::source::{ContractItem, SourceFile};
use solpup_common::file_kind::FileKind;

///
/// One of our lints. Each configured lint from solpup.ron becomes one of these,
/// and is run over every parsed source file in the project.
///
/// They provide:
/// * A name, which is used in the diagnostics to refer back to the configuration
///   item.
/// * The ability to check if certain contracts are targeted by our lint, so that
///   `solpup print-contracts` can show which rules are actually doing something.
pub trait SourceLintRule: Sync + Send {
    ///
    /// Returns the name of the lint rule. This is the name specified
    /// in solpup.ron
    ///
    fn name(&self) -> String;

    ///
    /// Returns true if the lint constrains the contract itself or any of
    /// its members.
    ///
    fn applies_to_contract(&self, contract: &ContractItem, file_kind: FileKind) -> bool;

    ///
    /// Runs the lint over a single file.
    ///
    fn check(&self, source: &SourceFile) -> Vec<LintResult>;
}
