use crate::contract_lint::{ContractLint, ContractMatch, ContractRule};
use crate::{ConfiguredLint, FileKind, GenerateFromContext, LintBuilder, Severity, contexts_cover};
use solpup_common::project_context::ProjectContext;

impl GenerateFromContext for ContractLint {
    fn generate_from_contexts(contexts: &[ProjectContext], builder: &mut LintBuilder) {
        if !contexts_cover(contexts, FileKind::Script) {
            return;
        }

        // Executable scripts expose a single `run` method. `setUp` is called by
        // forge itself, and constructors aren't callable.
        let script_entrypoint = ContractLint {
            name: "script_entrypoint".to_string(),
            matches: ContractMatch::InFile(FileKind::Script),
            rules: vec![ContractRule::SingleEntrypoint {
                entrypoint: "run".to_string(),
                ignored: vec!["setUp".to_string(), "constructor".to_string()],
                severity: Severity::Error,
            }],
        };
        builder.push(ConfiguredLint::Contract(script_entrypoint));
    }
}
