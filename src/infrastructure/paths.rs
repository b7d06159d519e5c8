//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host's home directory is mounted under
//! `/host`. These helpers map user-facing paths (`~/themes/dark.toml`) onto
//! that mount and locate the plugin's data directory.

use std::path::PathBuf;

/// Sandbox path of the host home directory.
const HOST_HOME: &str = "/host";

/// File name of the plugin log inside [`get_data_dir`].
pub const LOG_FILE_NAME: &str = "rolodex.log";

/// Returns the plugin data directory (`~/.local/share/zellij/rolodex` on the host).
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_HOME)
        .join(".local/share/zellij")
        .join("rolodex")
}

/// Returns the path of the plugin log file.
#[must_use]
pub fn log_file_path() -> PathBuf {
    get_data_dir().join(LOG_FILE_NAME)
}

/// Expands a leading `~` to the sandbox mount of the host home directory.
///
/// ```
/// use rolodex::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_HOME, 1)
    } else if path == "~" {
        HOST_HOME.to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a/b.toml"), "/host/a/b.toml");
        assert_eq!(expand_tilde("relative/~/x"), "relative/~/x");
    }

    #[test]
    fn test_log_file_lives_in_data_dir() {
        assert_eq!(
            log_file_path(),
            PathBuf::from("/host/.local/share/zellij/rolodex/rolodex.log")
        );
    }
}
