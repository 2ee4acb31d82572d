use super::matcher::{VariableMatchNode, VariableMatcher, matcher};
use super::types::{VariableLint, VariableMatch, VariableRule};
use crate::lint_builder::LintBuilder;
use crate::{ConfiguredLint, Severity};

/// Extension trait that adds variable linting capabilities to LintBuilder
pub trait VariableLintExt {
    /// Start building a lint over constants, immutables and state variables
    fn variable_lint(&mut self) -> VariableLintBuilder<'_>;
}

impl VariableLintExt for LintBuilder {
    fn variable_lint(&mut self) -> VariableLintBuilder<'_> {
        VariableLintBuilder { parent: self }
    }
}

/// Initial builder for creating a variable lint
pub struct VariableLintBuilder<'a> {
    parent: &'a mut LintBuilder,
}

impl<'a> VariableLintBuilder<'a> {
    /// Give the lint a name
    pub fn lint_named(self, name: impl Into<String>) -> VariableNamedBuilder<'a> {
        VariableNamedBuilder {
            parent: self.parent,
            name: name.into(),
        }
    }
}

/// Builder used after naming the lint
pub struct VariableNamedBuilder<'a> {
    parent: &'a mut LintBuilder,
    name: String,
}

impl<'a> VariableNamedBuilder<'a> {
    /// Directly provide a variable matcher
    pub fn matches(self, m: VariableMatch) -> VariableConstraintBuilder<'a> {
        VariableConstraintBuilder {
            parent: self.parent,
            match_: m,
            rules: Vec::new(),
            current_severity: Severity::default(),
            name: self.name,
        }
    }

    /// Define variable matching using the fluent DSL
    pub fn matching<F>(self, f: F) -> VariableConstraintBuilder<'a>
    where
        F: FnOnce(&VariableMatcher) -> VariableMatchNode,
    {
        let matcher = matcher(f);
        self.matches(matcher)
    }
}

/// Builder for adding rules to a variable lint
pub struct VariableConstraintBuilder<'a> {
    parent: &'a mut LintBuilder,
    match_: VariableMatch,
    rules: Vec<VariableRule>,
    current_severity: Severity,
    name: String,
}

impl<'a> VariableConstraintBuilder<'a> {
    /// Add a custom rule to the variable lint
    pub fn add_rule(mut self, rule: VariableRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Finalize the variable lint and return to the parent builder
    pub fn build(self) -> &'a mut LintBuilder {
        let lint = ConfiguredLint::Variable(VariableLint {
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

    /// Add a rule requiring matched variable names to match `pattern`
    pub fn must_be_named(self, pattern: impl Into<String>) -> Self {
        let severity = self.current_severity;
        self.add_rule(VariableRule::MustBeNamed(pattern.into(), severity))
    }

    /// Add a rule prohibiting matched variable names from matching `pattern`
    pub fn must_not_be_named(self, pattern: impl Into<String>) -> Self {
        let severity = self.current_severity;
        self.add_rule(VariableRule::MustNotBeNamed(pattern.into(), severity))
    }
}
