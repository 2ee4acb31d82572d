// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use crate::discovery::discover_sources;
use crate::helpers::lint_runner::{LintRunner, RunReport};
use crate::source::SourceFile;
use crate::{LintCollection, LintConfigurationFactory};
use anyhow::Result;
use solpup_common::project_context::ProjectContext;
use solpup_common::project_layout::ProjectLayout;
use solpup_common::workspace::find_config_file;
use solpup_lint_config::LintBuilder;
use std::path::{Path, PathBuf};

/// Where the lints for a run came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

/// A Foundry project with all of its Solidity sources parsed
#[derive(Debug)]
pub struct Project {
    pub layout: ProjectLayout,
    pub sources: Vec<SourceFile>,
}

impl Project {
    /// Reads the layout, discovers and parses every source file. The first file
    /// that fails to parse aborts the load.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let layout = ProjectLayout::load(root)?;
        let sources = discover_sources(&layout)
            .into_iter()
            .map(|f| SourceFile::load(&f.path, f.display_path, f.kind))
            .collect::<Result<Vec<_>>>()?;
        Ok(Project { layout, sources })
    }

    pub fn root_name(&self) -> String {
        self.layout.root.display().to_string()
    }

    pub fn check(&self, lints: LintCollection) -> RunReport {
        LintRunner::new(lints).check(&self.sources)
    }

    pub fn project_context(&self, lints: LintCollection) -> ProjectContext {
        LintRunner::new(lints).build_project_context(&self.root_name(), &self.sources)
    }
}

/// Resolves the lints to run: an explicit config file, else `solpup.ron` in the
/// root or one of its ancestors, else the built-in conventions.
pub fn load_lints(root: impl AsRef<Path>, config: Option<&Path>) -> Result<(LintCollection, ConfigSource)> {
    let root = root.as_ref();
    let config_path = match config {
        Some(path) => Some(path.to_path_buf()),
        // Relative roots like `.` have no ancestors until made absolute
        None => find_config_file(root.canonicalize().unwrap_or_else(|_| root.to_path_buf())),
    };

    match config_path {
        Some(path) => {
            let lints = LintConfigurationFactory::from_file(&path)?;
            Ok((LintCollection::new(lints), ConfigSource::File(path)))
        }
        None => Ok((builtin_lints(), ConfigSource::BuiltIn)),
    }
}

/// The built-in conventions, ready to run
pub fn builtin_lints() -> LintCollection {
    LintCollection::new(LintConfigurationFactory::from_builder(
        &LintBuilder::default_conventions(),
    ))
}

/// Lints the project at `root` with the given (or discovered) configuration
pub fn check_project(root: impl AsRef<Path>, config: Option<&Path>) -> Result<RunReport> {
    let root = root.as_ref();
    let (lints, _) = load_lints(root, config)?;
    let project = Project::load(root)?;
    Ok(project.check(lints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_builtin_lints_when_unconfigured() {
        let temp_dir = TempDir::new().unwrap();
        let (lints, source) = load_lints(temp_dir.path(), None).unwrap();
        assert_eq!(source, ConfigSource::BuiltIn);
        assert_eq!(lints.len(), 4);
    }

    #[test]
    fn test_config_file_is_found() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "solpup.ron", "(lints: [])");
        let (lints, source) = load_lints(temp_dir.path(), None).unwrap();
        let expected = temp_dir.path().canonicalize().unwrap().join("solpup.ron");
        assert_eq!(source, ConfigSource::File(expected));
        assert!(lints.is_empty());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.ron");
        assert!(load_lints(temp_dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_check_project_honours_foundry_layout() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "foundry.toml", "[profile.default]\nsrc = \"contracts\"\n");
        write(
            root,
            "contracts/Token.sol",
            "contract Token {\n    uint256 constant supply = 1;\n}\n",
        );
        // Not in the configured src dir, so never looked at
        write(root, "src/Ignored.sol", "contract Ignored { uint256 constant bad = 1; }");

        let report = check_project(root, None).unwrap();
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].file, "contracts/Token.sol");
        assert_eq!(report.results[0].line, 2);
        assert!(report.has_errors());
    }

    #[test]
    fn test_parse_errors_name_the_file() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/Broken.sol", "contract Broken {\n  function ( {\n}\n");

        let err = check_project(temp_dir.path(), None).unwrap_err();
        assert!(format!("{err}").contains("src/Broken.sol"), "{err}");
    }

    #[test]
    fn test_project_context() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/A.sol", "library A {}\n");
        let project = Project::load(temp_dir.path()).unwrap();
        let (lints, _) = load_lints(temp_dir.path(), None).unwrap();
        let context = project.project_context(lints);
        assert_eq!(context.contracts.len(), 1);
        assert_eq!(context.contracts[0].kind, "library");
        assert!(context.contracts[0].applicable_lints.is_empty());
    }
}
