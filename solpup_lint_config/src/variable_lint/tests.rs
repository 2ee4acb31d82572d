use crate::lint_builder::LintBuilder;
use crate::variable_lint::{VariableLintExt, VariableMatch, VariableRule};
use crate::{ConfiguredLint, FileKind, GenerateFromContext, Severity};

fn only_variable_lint(builder: &LintBuilder) -> &crate::VariableLint {
    assert_eq!(builder.lints.len(), 1);
    match &builder.lints[0] {
        ConfiguredLint::Variable(v) => v,
        _ => panic!("Expected a variable lint"),
    }
}

#[test]
fn test_constant_or_immutable_matcher() {
    let mut builder = LintBuilder::new();
    builder
        .variable_lint()
        .lint_named("caps")
        .matching(|m| m.constant().or(m.immutable()))
        .must_be_named("^[A-Z_]+$")
        .build();

    let lint = only_variable_lint(&builder);
    assert_eq!(lint.name, "caps");
    match &lint.matches {
        VariableMatch::OrMatches(left, right) => {
            assert!(matches!(**left, VariableMatch::Constant));
            assert!(matches!(**right, VariableMatch::Immutable));
        }
        _ => panic!("Expected OrMatches"),
    }
}

#[test]
fn test_not_and_scoping() {
    let mut builder = LintBuilder::new();
    builder
        .variable_lint()
        .lint_named("mutable_src_state")
        .matching(|m| {
            m.in_file(FileKind::Src)
                .and(m.constant().not())
                .and(m.in_contract("^Counter$"))
        })
        .must_not_be_named("^_")
        .build();

    let lint = only_variable_lint(&builder);
    // ((in_file AND NOT constant) AND in_contract)
    match &lint.matches {
        VariableMatch::AndMatches(left, right) => {
            assert!(matches!(**right, VariableMatch::InContract(ref p) if p == "^Counter$"));
            match &**left {
                VariableMatch::AndMatches(a, b) => {
                    assert!(matches!(**a, VariableMatch::InFile(FileKind::Src)));
                    assert!(matches!(**b, VariableMatch::NotMatch(_)));
                }
                _ => panic!("Expected nested AndMatches"),
            }
        }
        _ => panic!("Expected AndMatches"),
    }
}

#[test]
fn test_severity_applies_to_subsequent_rules() {
    let mut builder = LintBuilder::new();
    builder
        .variable_lint()
        .lint_named("mixed")
        .matching(|m| m.name_regex(".*"))
        .must_be_named("^[a-z]")
        .with_severity(Severity::Info)
        .must_not_be_named("tmp")
        .build();

    let lint = only_variable_lint(&builder);
    assert!(matches!(lint.rules[0], VariableRule::MustBeNamed(_, Severity::Error)));
    assert!(matches!(lint.rules[1], VariableRule::MustNotBeNamed(_, Severity::Info)));
}

#[test]
fn test_generated_constant_naming_lint() {
    let mut builder = LintBuilder::new();
    crate::VariableLint::generate_from_contexts(&[], &mut builder);

    let lint = only_variable_lint(&builder);
    assert_eq!(lint.name, "constant_naming");
    assert!(matches!(lint.matches, VariableMatch::OrMatches(_, _)));
    match &lint.rules[0] {
        VariableRule::MustBeNamed(pattern, severity) => {
            assert_eq!(pattern, crate::CONSTANT_NAME_PATTERN);
            assert_eq!(*severity, Severity::Error);
        }
        _ => panic!("Expected MustBeNamed"),
    }
}
