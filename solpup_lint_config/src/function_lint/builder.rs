use super::matcher::{FunctionMatchNode, FunctionMatcher, matcher};
use super::types::{FunctionLint, FunctionMatch, FunctionRule};
use crate::lint_builder::LintBuilder;
use crate::{ConfiguredLint, Severity};

/// Extension trait that adds function linting capabilities to LintBuilder
pub trait FunctionLintExt {
    /// Start building a function lint rule
    fn function_lint(&mut self) -> FunctionLintBuilder<'_>;
}

impl FunctionLintExt for LintBuilder {
    fn function_lint(&mut self) -> FunctionLintBuilder<'_> {
        FunctionLintBuilder { parent: self }
    }
}

/// Initial builder for creating a function lint
pub struct FunctionLintBuilder<'a> {
    parent: &'a mut LintBuilder,
}

impl<'a> FunctionLintBuilder<'a> {
    /// Give the lint a name
    pub fn lint_named(self, name: impl Into<String>) -> FunctionNamedBuilder<'a> {
        FunctionNamedBuilder {
            parent: self.parent,
            name: name.into(),
        }
    }
}

/// Builder used after naming the lint
pub struct FunctionNamedBuilder<'a> {
    parent: &'a mut LintBuilder,
    name: String,
}

impl<'a> FunctionNamedBuilder<'a> {
    /// Directly provide a function matcher
    pub fn matches(self, m: FunctionMatch) -> FunctionConstraintBuilder<'a> {
        FunctionConstraintBuilder {
            parent: self.parent,
            match_: m,
            rules: Vec::new(),
            current_severity: Severity::default(),
            name: self.name,
        }
    }

    /// Define function matching using the fluent DSL
    ///
    /// # Example
    /// ```
    /// use solpup_lint_config::{FileKind, FunctionLintExt, LintBuilder};
    /// let mut lint_builder = LintBuilder::new();
    /// lint_builder.function_lint()
    ///     .lint_named("no_helpers_in_tests")
    ///     .matching(|m| m.in_file(FileKind::Test).and(m.name_regex("^helper")))
    ///     .must_not_be_named("^helper")
    ///     .build();
    /// ```
    pub fn matching<F>(self, f: F) -> FunctionConstraintBuilder<'a>
    where
        F: FnOnce(&FunctionMatcher) -> FunctionMatchNode,
    {
        let matcher = matcher(f);
        self.matches(matcher)
    }
}

/// Builder for adding rules to a function lint
pub struct FunctionConstraintBuilder<'a> {
    parent: &'a mut LintBuilder,
    match_: FunctionMatch,
    rules: Vec<FunctionRule>,
    current_severity: Severity,
    name: String,
}

impl<'a> FunctionConstraintBuilder<'a> {
    // Private method to add a rule directly to self
    fn add_rule_internal(&mut self, rule: FunctionRule) {
        self.rules.push(rule);
    }

    /// Add a custom rule to the function lint
    pub fn add_rule(mut self, rule: FunctionRule) -> Self {
        self.add_rule_internal(rule);
        self
    }

    /// Finalize the function lint and return to the parent builder
    pub fn build(self) -> &'a mut LintBuilder {
        let lint = ConfiguredLint::Function(FunctionLint {
            name: self.name,
            matches: self.match_,
            rules: self.rules,
        });
        self.parent.push(lint);
        self.parent
    }

    /// Set the severity level for all subsequently added rules
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.current_severity = severity;
        self
    }

    /// Add a rule requiring matched function names to match `pattern`
    pub fn must_be_named(mut self, pattern: impl Into<String>) -> Self {
        self.add_rule_internal(FunctionRule::MustBeNamed(pattern.into(), self.current_severity));
        self
    }

    /// Add a rule prohibiting matched function names from matching `pattern`
    pub fn must_not_be_named(mut self, pattern: impl Into<String>) -> Self {
        self.add_rule_internal(FunctionRule::MustNotBeNamed(
            pattern.into(),
            self.current_severity,
        ));
        self
    }
}
