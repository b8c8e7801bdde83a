//! Path utilities for editor configuration files

use std::path::PathBuf;

/// Default config filename
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Get the configuration directory for an application
///
/// Returns: `{config_dir}/{app_name}` (e.g. `~/.config/adsr-designer` on Linux)
pub fn app_config_dir(app_name: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app_name)
}

/// Get the default config file path for an application
///
/// Returns: `{config_dir}/{app_name}/config.yaml`
pub fn default_config_path(app_name: &str) -> PathBuf {
    app_config_dir(app_name).join(CONFIG_FILENAME)
}
