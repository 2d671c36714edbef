//! XDG Base Directory paths for scm-hub.
//!
//! Configuration follows XDG paths on every platform so the same layout
//! works for desktop shells and headless hosts.

use std::path::PathBuf;

/// Name of the directory scm-hub uses under the XDG roots
const APP_DIR: &str = "scm-hub";

/// Get the scm-hub config directory.
///
/// Returns `$XDG_CONFIG_HOME/scm-hub` if set, otherwise `~/.config/scm-hub`.
///
/// # Examples
///
/// ```
/// use scm_core::paths::config_dir;
///
/// let config = config_dir();
/// assert!(config.ends_with("scm-hub"));
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".config").join(APP_DIR)
    }
}

/// Path of the SCM configuration file
pub fn scm_config_file() -> PathBuf {
    config_dir().join("scm.toml")
}
