use std::{
    env,
    path::{Path, PathBuf},
};

/// File name looked up when no explicit config path is given.
pub const CONFIG_FILE: &str = ".verbump.toml";

/// Returns the current working directory.
pub fn get_cwd() -> PathBuf {
    // Fall back to `.` rather than failing when the cwd is unavailable.
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Walks upward from `start` and returns the first `.verbump.toml` found.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Finds the config file from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    find_config_from(&get_cwd())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_config_in_ancestor() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(CONFIG_FILE), "").unwrap();

        assert_eq!(
            find_config_from(&nested),
            Some(root.path().join(CONFIG_FILE))
        );
    }

    #[test]
    fn nearest_config_wins() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(CONFIG_FILE), "").unwrap();
        fs::write(nested.join(CONFIG_FILE), "").unwrap();

        assert_eq!(find_config_from(&nested), Some(nested.join(CONFIG_FILE)));
    }
}
