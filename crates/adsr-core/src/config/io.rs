//! Editor config persistence
//!
//! Reading never fails: a missing, unreadable or unparsable file yields the
//! defaults, and a parsed file is sanitized before it is handed out.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use super::EditorConfig;

/// Load the editor config from a YAML file
///
/// Every repaired field is logged at `warn`.
pub fn load_config(path: &Path) -> EditorConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("load_config: no config at {:?}, using defaults", path);
            return EditorConfig::default();
        }
        Err(e) => {
            log::warn!("load_config: cannot read {:?}: {}, using defaults", path, e);
            return EditorConfig::default();
        }
    };

    let mut config = match serde_yaml::from_str::<EditorConfig>(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("load_config: invalid YAML in {:?}: {}, using defaults", path, e);
            return EditorConfig::default();
        }
    };

    for repair in config.sanitize() {
        log::warn!(
            "load_config: {} = {} is out of range, using {}",
            repair.field,
            repair.was,
            repair.now
        );
    }

    log::info!("load_config: loaded {:?}", path);
    config
}

/// Save the editor config as YAML, creating parent directories
pub fn save_config(config: &EditorConfig, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("serializing editor config")?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {:?}", dir))?;
    }
    std::fs::write(path, yaml).with_context(|| format!("writing config file {:?}", path))?;

    log::info!("save_config: wrote {:?}", path);
    Ok(())
}
