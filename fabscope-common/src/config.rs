//! Configuration loading and data folder resolution
//!
//! [REQ-RR-NF-010]: Zero-config startup

use std::path::PathBuf;

use crate::{Error, Result};

/// Environment variable checked when no CLI argument is given
pub const DATA_FOLDER_ENV: &str = "FABSCOPE_DATA";

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`data_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATA_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(folder) = config.get("data_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_data_folder()
}

/// Get configuration file path for the platform
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/fabscope/config.toml first, then /etc/fabscope/config.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("fabscope").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/fabscope/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("fabscope").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

/// Get OS-dependent default data folder path
fn default_data_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        dirs::data_local_dir()
            .map(|d| d.join("fabscope"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/fabscope"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("fabscope"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/fabscope"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("fabscope"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\fabscope"))
    } else {
        PathBuf::from("./fabscope_data")
    }
}
