use crate::variable_lint::{VariableLint, VariableMatch, VariableRule};
use crate::{CONSTANT_NAME_PATTERN, ConfiguredLint, GenerateFromContext, LintBuilder, Severity};
use solpup_common::project_context::ProjectContext;

impl GenerateFromContext for VariableLint {
    fn generate_from_contexts(_contexts: &[ProjectContext], builder: &mut LintBuilder) {
        // Constants and immutables are ALL_CAPS everywhere in the project
        let constant_naming = VariableLint {
            name: "constant_naming".to_string(),
            matches: VariableMatch::OrMatches(
                Box::new(VariableMatch::Constant),
                Box::new(VariableMatch::Immutable),
            ),
            rules: vec![VariableRule::MustBeNamed(
                CONSTANT_NAME_PATTERN.to_string(),
                Severity::Error,
            )],
        };
        builder.push(ConfiguredLint::Variable(constant_naming));
    }
}
