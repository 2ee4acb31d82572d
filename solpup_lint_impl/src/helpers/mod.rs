pub mod lint_collection;
pub mod lint_runner;
pub mod pattern;
