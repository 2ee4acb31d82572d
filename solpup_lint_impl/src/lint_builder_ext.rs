// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::{LintCollection, LintConfigurationFactory, Project, RunReport};
use anyhow::Result;
use solpup_lint_config::LintBuilder;
use std::path::Path;

/// Lets a test assert that a project follows the conventions a builder describes
pub trait LintBuilderExt {
    /// Runs the builder's lints over the project at `project_root`.
    ///
    /// Panics, printing the findings, if any of them is an error. Returns the
    /// report otherwise, so warnings can be inspected.
    fn assert_lints(&self, project_root: impl AsRef<Path>) -> Result<RunReport>;
}

impl LintBuilderExt for LintBuilder {
    fn assert_lints(&self, project_root: impl AsRef<Path>) -> Result<RunReport> {
        let lints = LintCollection::new(LintConfigurationFactory::from_builder(self));
        let report = Project::load(project_root)?.check(lints);

        if report.has_errors() {
            eprintln!("Lint results:\n{}", report.to_text());
            panic!("solpup checks failed!");
        }

        Ok(report)
    }
}
