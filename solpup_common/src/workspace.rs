// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "solpup.ron";

/// Find solpup.ron in `start` or the closest ancestor directory that has one
pub fn find_config_file(start: impl AsRef<Path>) -> Option<PathBuf> {
    start
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_config_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("packages").join("core");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "(lints: [])").unwrap();

        let found = find_config_file(&nested).expect("config should be found");
        assert_eq!(found, temp_dir.path().join(CONFIG_FILE));
    }

    #[test]
    fn test_closest_config_wins() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "(lints: [])").unwrap();
        fs::write(nested.join(CONFIG_FILE), "(lints: [])").unwrap();

        assert_eq!(find_config_file(&nested), Some(nested.join(CONFIG_FILE)));
    }

    #[test]
    fn test_directory_named_like_config_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let bogus = temp_dir.path().join("deeper");
        fs::create_dir_all(bogus.join(CONFIG_FILE)).unwrap();

        // Only a file counts; the search carries on upwards past the directory.
        let found = find_config_file(&bogus);
        assert!(found.map_or(true, |p| p != bogus.join(CONFIG_FILE)));
    }
}
