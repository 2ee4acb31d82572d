use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::file_kind::FileKind;

pub const FOUNDRY_TOML: &str = "foundry.toml";

/// The directories of a Foundry project that we lint, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub src: PathBuf,
    pub test: PathBuf,
    pub script: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct FoundryToml {
    #[serde(default)]
    profile: FoundryProfiles,
}

#[derive(Debug, Default, Deserialize)]
struct FoundryProfiles {
    #[serde(default)]
    default: FoundryProfile,
}

#[derive(Debug, Default, Deserialize)]
struct FoundryProfile {
    src: Option<String>,
    test: Option<String>,
    script: Option<String>,
}

impl ProjectLayout {
    /// The layout Foundry uses when nothing is configured
    pub fn default_for(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            src: PathBuf::from("src"),
            test: PathBuf::from("test"),
            script: PathBuf::from("script"),
        }
    }

    /// Loads the layout for the project at `root`, honouring the `src`, `test` and
    /// `script` keys of `[profile.default]` in foundry.toml if there is one.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut layout = Self::default_for(root);

        let foundry_toml = root.join(FOUNDRY_TOML);
        if !foundry_toml.exists() {
            return Ok(layout);
        }

        let content = fs::read_to_string(&foundry_toml)
            .context(format!("Failed to read {}", foundry_toml.display()))?;
        let parsed: FoundryToml = toml::from_str(&content)
            .context(format!("Failed to parse {}", foundry_toml.display()))?;

        let profile = parsed.profile.default;
        if let Some(src) = profile.src {
            layout.src = PathBuf::from(src);
        }
        if let Some(test) = profile.test {
            layout.test = PathBuf::from(test);
        }
        if let Some(script) = profile.script {
            layout.script = PathBuf::from(script);
        }
        Ok(layout)
    }

    /// Absolute-ish paths to the three lintable directories, paired with the
    /// kind of file they hold.
    pub fn lint_dirs(&self) -> Vec<(PathBuf, FileKind)> {
        vec![
            (self.root.join(&self.src), FileKind::Src),
            (self.root.join(&self.script), FileKind::Script),
            (self.root.join(&self.test), FileKind::Test),
        ]
    }
}
