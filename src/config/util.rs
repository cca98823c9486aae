//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/getting-started/  ← cwd
/// /home/user/site/site.toml              ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting at `start` instead of cwd.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/getting-started");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, dir.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.prod.toml");
        assert_eq!(find_config_from(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_from(Path::new("/"), &path), Some(path));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("site.toml")).unwrap();
        let nested = dir.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        // A directory named like the config never matches
        let found = find_config_from(&nested, Path::new("site.toml"));
        assert!(found.is_none_or(|p| p != dir.path().join("site.toml")));
    }
}
