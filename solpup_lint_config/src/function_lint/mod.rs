// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

mod builder;
mod generate_config;
mod matcher;
#[cfg(test)]
mod tests;
/// Function lint module provides tools for creating and configuring function-level lints
///
/// These lints can verify properties like:
/// - Leading underscores on internal and private functions
/// - The shape of test function names
///
/// # Example
/// ```
/// use solpup_lint_config::{FileKind, LintBuilder, Severity, Visibility};
/// use solpup_lint_config::function_lint::FunctionLintExt;
///
/// let mut builder = LintBuilder::new();
///
/// // Internal functions in production code start with an underscore
/// builder.function_lint()
///     .lint_named("internal_function_naming")
///     .matching(|m| m.in_file(FileKind::Src).and(m.has_visibility(Visibility::Internal)))
///     .with_severity(Severity::Error)
///     .must_be_named("^_")
///     .build();
/// ```
mod types;

// Core types for defining function lints
pub use types::{FunctionLint, FunctionMatch, FunctionRule};

// Function matcher DSL for creating complex matching rules
pub use matcher::{FunctionMatchNode, FunctionMatcher, matcher};

// Builder API for creating function lints
pub use builder::{
    FunctionConstraintBuilder, FunctionLintBuilder, FunctionLintExt, FunctionNamedBuilder,
};
