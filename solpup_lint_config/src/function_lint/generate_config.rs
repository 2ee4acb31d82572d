// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::function_lint::{FunctionLint, FunctionMatch, FunctionRule};
use crate::{
    ConfiguredLint, FileKind, GenerateFromContext, INTERNAL_FUNCTION_PATTERN, LintBuilder,
    Severity, TEST_NAME_PATTERN, Visibility, contexts_cover,
};
use solpup_common::project_context::ProjectContext;

impl GenerateFromContext for FunctionLint {
    fn generate_from_contexts(contexts: &[ProjectContext], builder: &mut LintBuilder) {
        // Rule 1: internal and private functions in src start with an underscore
        if contexts_cover(contexts, FileKind::Src) {
            let internal_naming = FunctionLint {
                name: "internal_function_naming".to_string(),
                matches: FunctionMatch::AndMatches(
                    Box::new(FunctionMatch::InFile(FileKind::Src)),
                    Box::new(FunctionMatch::OrMatches(
                        Box::new(FunctionMatch::HasVisibility(Visibility::Internal)),
                        Box::new(FunctionMatch::HasVisibility(Visibility::Private)),
                    )),
                ),
                rules: vec![FunctionRule::MustBeNamed(
                    INTERNAL_FUNCTION_PATTERN.to_string(),
                    Severity::Error,
                )],
            };
            builder.push(ConfiguredLint::Function(internal_naming));
        }

        // Rule 2: anything in a test file that looks like a test follows the test naming scheme
        if contexts_cover(contexts, FileKind::Test) {
            let test_naming = FunctionLint {
                name: "test_naming".to_string(),
                matches: FunctionMatch::AndMatches(
                    Box::new(FunctionMatch::InFile(FileKind::Test)),
                    Box::new(FunctionMatch::NameRegex("^test".to_string())),
                ),
                rules: vec![FunctionRule::MustBeNamed(
                    TEST_NAME_PATTERN.to_string(),
                    Severity::Error,
                )],
            };
            builder.push(ConfiguredLint::Function(test_naming));
        }
    }
}
