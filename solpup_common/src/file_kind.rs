// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Where a Solidity file lives in the project, which decides the conventions
/// that apply to it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileKind {
    /// Production contracts under the source directory
    Src,
    /// Test contracts (`*.t.sol`) under the test directory
    Test,
    /// Any other Solidity file under the test directory
    TestHelper,
    /// Executable scripts (`*.s.sol`) under the script directory
    Script,
    /// Non-executable helper contracts under the script directory
    ScriptHelper,
}

impl FileKind {
    /// Classifies a file found under one of the three layout directories.
    /// `dir_kind` is the kind of the directory the file was found in.
    pub fn classify(dir_kind: FileKind, path: &Path) -> FileKind {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match dir_kind {
            FileKind::Test | FileKind::TestHelper => {
                if file_name.ends_with(".t.sol") {
                    FileKind::Test
                } else {
                    FileKind::TestHelper
                }
            }
            // Executable script files are expected to end with `.s.sol`, whereas
            // helper contracts in the scripts dir just end with `.sol`.
            FileKind::Script | FileKind::ScriptHelper => {
                if file_name.ends_with(".s.sol") {
                    FileKind::Script
                } else {
                    FileKind::ScriptHelper
                }
            }
            FileKind::Src => FileKind::Src,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Src => "src",
            FileKind::Test => "test",
            FileKind::TestHelper => "test helper",
            FileKind::Script => "script",
            FileKind::ScriptHelper => "script helper",
        };
        write!(f, "{name}")
    }
}

/// Converts a byte offset into `content` to a 1-based line number. Offsets past
/// the end of the content resolve to the last line.
pub fn offset_to_line(content: &str, offset: usize) -> usize {
    let mut end = offset.min(content.len());
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    content[..end].matches('\n').count() + 1
}

/// Returns the text of the 1-based `line` without its trailing newline.
pub fn line_text(content: &str, line: usize) -> &str {
    if line == 0 {
        return "";
    }
    content
        .lines()
        .nth(line - 1)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_classify_test_dir() {
        let test = PathBuf::from("test/Counter.t.sol");
        let helper = PathBuf::from("test/utils/Helpers.sol");
        assert_eq!(FileKind::classify(FileKind::Test, &test), FileKind::Test);
        assert_eq!(FileKind::classify(FileKind::Test, &helper), FileKind::TestHelper);
    }

    #[test]
    fn test_classify_script_dir() {
        let script = PathBuf::from("script/Deploy.s.sol");
        let helper = PathBuf::from("script/DeployHelper.sol");
        assert_eq!(FileKind::classify(FileKind::Script, &script), FileKind::Script);
        assert_eq!(
            FileKind::classify(FileKind::Script, &helper),
            FileKind::ScriptHelper
        );
    }

    #[test]
    fn test_classify_src_ignores_suffix() {
        // A `.t.sol` file under src is still production code
        let odd = PathBuf::from("src/Weird.t.sol");
        assert_eq!(FileKind::classify(FileKind::Src, &odd), FileKind::Src);
    }

    #[test]
    fn test_offset_to_line() {
        let content = "line one\nline two\nline three\n";
        assert_eq!(offset_to_line(content, 0), 1);
        assert_eq!(offset_to_line(content, 8), 1); // The newline itself
        assert_eq!(offset_to_line(content, 9), 2);
        assert_eq!(offset_to_line(content, 20), 3);
        assert_eq!(offset_to_line(content, 10_000), 4);
    }

    #[test]
    fn test_offset_to_line_multibyte() {
        let content = "// ünïcode\nuint256 x;";
        let offset = content.find("uint256").unwrap();
        assert_eq!(offset_to_line(content, offset), 2);
        // Offsets inside a multi-byte char don't panic
        assert_eq!(offset_to_line(content, 4), 1);
    }

    #[test]
    fn test_line_text() {
        let content = "first\nsecond\n";
        assert_eq!(line_text(content, 1), "first");
        assert_eq!(line_text(content, 2), "second");
        assert_eq!(line_text(content, 3), "");
        assert_eq!(line_text(content, 0), "");
    }
}
