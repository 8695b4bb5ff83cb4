//! Path management for Rolodex CLI
//!
//! Provides XDG-compliant path resolution for configuration and contact data.
//!
//! ## Path Resolution Order
//!
//! 1. `ROLODEX_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/rolodex-cli` or `~/.config/rolodex-cli`
//! 3. Windows: `%APPDATA%\rolodex-cli`

use std::path::PathBuf;

use crate::error::RolodexError;

/// Manages all paths used by Rolodex CLI
#[derive(Debug, Clone)]
pub struct RolodexPaths {
    /// Base directory for all Rolodex data
    base_dir: PathBuf,
}

impl RolodexPaths {
    /// Create a new RolodexPaths instance
    ///
    /// Path resolution:
    /// 1. `ROLODEX_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/rolodex-cli` or `~/.config/rolodex-cli`
    /// 3. Windows: `%APPDATA%\rolodex-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RolodexError> {
        let base_dir = if let Ok(custom) = std::env::var("ROLODEX_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RolodexPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/rolodex-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/rolodex-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to contacts.json (the address book snapshot)
    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("contacts.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/rolodex-cli/)
    /// - Data directory (~/.config/rolodex-cli/data/)
    pub fn ensure_directories(&self) -> Result<(), RolodexError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RolodexError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RolodexError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RolodexError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| RolodexError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("rolodex-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RolodexError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RolodexError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("rolodex-cli"))
}
