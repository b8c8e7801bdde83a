//! Command line flags
//!
//! - `--config <path>`: use a config file other than the default location

use std::path::PathBuf;

use adsr_core::config::default_config_path;

use crate::APP_NAME;

/// Resolve the config path from command line arguments
///
/// Falls back to `<config_dir>/adsr-designer/config.yaml`. A trailing
/// `--config` without a value is ignored with a warning.
pub fn config_path_from_args<I>(args: I) -> PathBuf
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            match args.next() {
                Some(path) => return PathBuf::from(path),
                None => log::warn!("--config given without a path, using default"),
            }
        } else if let Some(path) = arg.strip_prefix("--config=") {
            return PathBuf::from(path);
        }
    }
    default_config_path(APP_NAME)
}
