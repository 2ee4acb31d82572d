use crate::function_lint::{FunctionLint, FunctionLintExt, FunctionMatch, FunctionRule};
use crate::{ConfiguredLint, FileKind, GenerateFromContext, LintBuilder, Severity, Visibility};
use solpup_common::project_context::{ContractInfo, ProjectContext};

fn function_lints(builder: &LintBuilder) -> Vec<FunctionLint> {
    builder
        .build()
        .into_iter()
        .filter_map(|lint| match lint {
            ConfiguredLint::Function(f) => Some(f),
            _ => None,
        })
        .collect()
}

#[test]
fn test_function_lint_generate_from_empty_contexts() {
    let contexts = Vec::<ProjectContext>::new();
    let mut builder = LintBuilder::new();

    FunctionLint::generate_from_contexts(&contexts, &mut builder);

    let lints = function_lints(&builder);
    assert_eq!(lints.len(), 2);
    assert!(lints.iter().any(|l| l.name == "internal_function_naming"));
    assert!(lints.iter().any(|l| l.name == "test_naming"));
}

fn context_with(contracts: &[(&str, &str, FileKind)]) -> ProjectContext {
    ProjectContext::with_data(
        ".",
        contracts
            .iter()
            .map(|(name, file, file_kind)| ContractInfo {
                name: name.to_string(),
                kind: "contract".to_string(),
                file: file.to_string(),
                file_kind: *file_kind,
                functions: vec![],
                applicable_lints: vec![],
            })
            .collect(),
    )
}

#[test]
fn test_function_lint_generate_from_src_only_project() {
    let contexts = vec![context_with(&[("Token", "src/Token.sol", FileKind::Src)])];
    let mut builder = LintBuilder::new();

    FunctionLint::generate_from_contexts(&contexts, &mut builder);

    let names: Vec<String> = function_lints(&builder).into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["internal_function_naming"]);
}

#[test]
fn test_function_lint_generate_from_tests_only_project() {
    let contexts = vec![context_with(&[(
        "TokenTest",
        "test/Token.t.sol",
        FileKind::Test,
    )])];
    let mut builder = LintBuilder::new();

    FunctionLint::generate_from_contexts(&contexts, &mut builder);

    let names: Vec<String> = function_lints(&builder).into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["test_naming"]);
}

#[test]
fn test_function_lint_generate_from_contexts_without_contracts() {
    let contexts = vec![context_with(&[])];
    let mut builder = LintBuilder::new();

    FunctionLint::generate_from_contexts(&contexts, &mut builder);

    assert_eq!(function_lints(&builder).len(), 2);
}

#[test]
fn test_generated_test_naming_is_scoped_to_test_files() {
    let mut builder = LintBuilder::new();
    FunctionLint::generate_from_contexts(&[], &mut builder);

    let lints = function_lints(&builder);
    let test_naming = lints.iter().find(|l| l.name == "test_naming").unwrap();
    match &test_naming.matches {
        FunctionMatch::AndMatches(left, right) => {
            assert!(matches!(**left, FunctionMatch::InFile(FileKind::Test)));
            assert!(matches!(**right, FunctionMatch::NameRegex(ref p) if p == "^test"));
        }
        _ => panic!("Expected AndMatches"),
    }
}

#[test]
fn test_hidden_shorthand() {
    let mut builder = LintBuilder::new();
    builder
        .function_lint()
        .lint_named("hidden")
        .matching(|m| m.hidden())
        .must_be_named("^_")
        .build();

    let lints = function_lints(&builder);
    match &lints[0].matches {
        FunctionMatch::OrMatches(left, right) => {
            assert!(matches!(**left, FunctionMatch::HasVisibility(Visibility::Internal)));
            assert!(matches!(**right, FunctionMatch::HasVisibility(Visibility::Private)));
        }
        _ => panic!("Expected OrMatches"),
    }
}

#[test]
fn test_builder_rules_and_severity() {
    let mut builder = LintBuilder::new();
    builder
        .function_lint()
        .lint_named("no_run_outside_scripts")
        .matching(|m| m.name_equals("run").and(m.in_file(FileKind::Script).not()))
        .with_severity(Severity::Warn)
        .must_not_be_named("^run$")
        .build();

    let lints = function_lints(&builder);
    assert_eq!(lints.len(), 1);
    assert_eq!(lints[0].name, "no_run_outside_scripts");
    assert!(matches!(
        lints[0].rules[0],
        FunctionRule::MustNotBeNamed(_, Severity::Warn)
    ));
    match &lints[0].matches {
        FunctionMatch::AndMatches(_, right) => {
            assert!(matches!(**right, FunctionMatch::NotMatch(_)));
        }
        _ => panic!("Expected AndMatches"),
    }
}

#[test]
fn test_in_contract_matcher() {
    let mut builder = LintBuilder::new();
    builder
        .function_lint()
        .lint_named("counter_only")
        .matching(|m| m.in_contract("^Counter$"))
        .must_be_named("^[a-z_]")
        .build();

    let lints = function_lints(&builder);
    assert!(matches!(lints[0].matches, FunctionMatch::InContract(ref p) if p == "^Counter$"));
}
