use super::matcher::{ContractMatchNode, ContractMatcher, matcher};
use super::types::{ContractLint, ContractMatch, ContractRule};
use crate::lint_builder::LintBuilder;
use crate::{ConfiguredLint, Severity};

/// Extension trait that adds contract linting capabilities to LintBuilder
pub trait ContractLintExt {
    /// Start building a contract lint rule
    fn contract_lint(&mut self) -> ContractLintBuilder<'_>;
}

impl ContractLintExt for LintBuilder {
    fn contract_lint(&mut self) -> ContractLintBuilder<'_> {
        ContractLintBuilder { parent: self }
    }
}

/// Initial builder for creating a contract lint
pub struct ContractLintBuilder<'a> {
    parent: &'a mut LintBuilder,
}

impl<'a> ContractLintBuilder<'a> {
    /// Give the lint a name
    pub fn lint_named(self, name: impl Into<String>) -> ContractNamedBuilder<'a> {
        ContractNamedBuilder {
            parent: self.parent,
            name: name.into(),
        }
    }
}

/// Builder used after naming the lint
pub struct ContractNamedBuilder<'a> {
    parent: &'a mut LintBuilder,
    name: String,
}

impl<'a> ContractNamedBuilder<'a> {
    /// Directly provide a contract matcher
    pub fn matches(self, m: ContractMatch) -> ContractConstraintBuilder<'a> {
        ContractConstraintBuilder {
            parent: self.parent,
            match_: m,
            rules: Vec::new(),
            current_severity: Severity::default(),
            name: self.name,
        }
    }

    /// Define contract matching using the fluent DSL
    pub fn matching<F>(self, f: F) -> ContractConstraintBuilder<'a>
    where
        F: FnOnce(&ContractMatcher) -> ContractMatchNode,
    {
        let matcher = matcher(f);
        self.matches(matcher)
    }
}

/// Builder for adding rules to a contract lint
pub struct ContractConstraintBuilder<'a> {
    parent: &'a mut LintBuilder,
    match_: ContractMatch,
    rules: Vec<ContractRule>,
    current_severity: Severity,
    name: String,
}

impl<'a> ContractConstraintBuilder<'a> {
    /// Add a custom rule to the contract lint
    pub fn add_rule(mut self, rule: ContractRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Finalize the contract lint and return to the parent builder
    pub fn build(self) -> &'a mut LintBuilder {
        let lint = ConfiguredLint::Contract(ContractLint {
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

    /// Add a rule requiring matched contract names to match `pattern`
    pub fn must_be_named(self, pattern: impl Into<String>) -> Self {
        let severity = self.current_severity;
        self.add_rule(ContractRule::MustBeNamed(pattern.into(), severity))
    }

    /// Add a rule prohibiting matched contract names from matching `pattern`
    pub fn must_not_be_named(self, pattern: impl Into<String>) -> Self {
        let severity = self.current_severity;
        self.add_rule(ContractRule::MustNotBeNamed(pattern.into(), severity))
    }

    /// Add a rule requiring the matched contracts of each file to expose
    /// exactly one public or external function, named `entrypoint`. Functions
    /// named in `ignored` don't count.
    ///
    /// # Example
    /// ```
    /// use solpup_lint_config::{ContractLintExt, FileKind, LintBuilder};
    /// let mut lint_builder = LintBuilder::new();
    /// lint_builder.contract_lint()
    ///     .lint_named("script_entrypoint")
    ///     .matching(|m| m.in_file(FileKind::Script))
    ///     .single_entrypoint("run", vec!["setUp".to_string()])
    ///     .build();
    /// ```
    pub fn single_entrypoint(self, entrypoint: impl Into<String>, ignored: Vec<String>) -> Self {
        let severity = self.current_severity;
        self.add_rule(ContractRule::SingleEntrypoint {
            entrypoint: entrypoint.into(),
            ignored,
            severity,
        })
    }
}
