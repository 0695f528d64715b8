use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use spdlog::info;

use plainblog::config::{read_config, Config, CONFIG_SAMPLE};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir();

    [exe_dir, cur_dir, cfg_dir]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// An explicit path must exist. Without one, the usual locations are searched
/// and built-in defaults apply when nothing is found.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        info!("No {} found. Using default configuration", CFG_FILE_NAME);
        return Ok(Config::default());
    };

    info!("Reading config from {}", config_path.display());
    let config = read_config(&config_path)?;
    Ok(config)
}

pub(crate) fn write_sample_cfg(file_path: &Path) -> Result<()> {
    fs::write(file_path, CONFIG_SAMPLE)
        .with_context(|| format!("Error writing sample configuration to {}", file_path.display()))?;
    info!("Wrote sample config to {}", file_path.display());
    Ok(())
}
