use crate::core::error::HubError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, HubError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join("cvhub"))
        .ok_or(HubError::ConfigDirectoryNotFound)
}

pub fn default_config_file() -> Result<PathBuf, HubError> {
    Ok(get_config_directory()?.join("config.json"))
}
