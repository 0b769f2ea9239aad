//! Where minuta keeps its preferences, logs and exported drafts
//!
//! Preferences and logs live under `~/.config/minuta/` (`%APPDATA%\minuta\`
//! on Windows); exports default to the downloads folder.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "minuta";

/// Base config directory for minuta
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/minuta`
///   - Else: `~/.config/minuta`
///
/// Windows:
///   - `%APPDATA%\minuta`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/minuta/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/minuta/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Default directory for exported drafts: the user's downloads folder,
/// falling back to the working directory
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Create the logs directory (and the config directory above it)
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
