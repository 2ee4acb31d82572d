// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

pub mod discovery;
pub mod helpers;
pub mod lint_result;
pub mod lints;
pub mod project;
pub mod source;

mod configuration_factory;
mod lint_builder_ext;
mod source_lint_rule;

// Re-export our public API
pub use configuration_factory::LintConfigurationFactory;
pub use helpers::lint_collection::LintCollection;
pub use helpers::lint_runner::{LintRunner, Mode, RunOutput, RunReport};
pub use lint_builder_ext::LintBuilderExt;
pub use lint_result::LintResult;
pub use project::{ConfigSource, Project, builtin_lints, check_project, load_lints};
pub use source::SourceFile;
pub use source_lint_rule::SourceLintRule;
