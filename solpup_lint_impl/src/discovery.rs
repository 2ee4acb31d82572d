use ansi_term::Colour::Yellow;
use solpup_common::file_kind::FileKind;
use solpup_common::project_layout::ProjectLayout;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A Solidity file found in one of the project's lintable directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    /// Path relative to the project root, with `/` separators
    pub display_path: String,
    pub kind: FileKind,
}

/// Finds every `.sol` file under the layout's src, script and test directories,
/// sorted by path. Directories that don't exist are skipped.
///
/// When directories overlap, the script and test classifications win over src.
pub fn discover_sources(layout: &ProjectLayout) -> Vec<DiscoveredFile> {
    let mut found: BTreeMap<PathBuf, FileKind> = BTreeMap::new();

    for (dir, dir_kind) in layout.lint_dirs() {
        if !dir.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("{}: skipping unreadable entry: {e}", Yellow.bold().paint("warning"));
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "sol") {
                continue;
            }

            let kind = FileKind::classify(dir_kind, path);
            match found.get(path) {
                Some(FileKind::Src) | None => {
                    found.insert(path.to_path_buf(), kind);
                }
                Some(_) => (),
            }
        }
    }

    found
        .into_iter()
        .map(|(path, kind)| DiscoveredFile {
            display_path: display_path(&layout.root, &path),
            path,
            kind,
        })
        .collect()
}

fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
