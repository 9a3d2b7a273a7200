//! Platform directory resolution.

use std::path::PathBuf;

use folio_common::PlatformError;

const APP_NAME: &str = "folio";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/folio`
/// - Linux: `$XDG_CONFIG_HOME/folio` (defaults to `~/.config/folio`)
/// - Windows: `%APPDATA%\folio`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the path to the log directory.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Create all application directories that are expected to exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, log_dir()?] {
        std::fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_app_name() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn config_file_is_inside_config_dir() {
        let file = config_file().unwrap();
        assert!(file.starts_with(config_dir().unwrap()));
        assert_eq!(file.file_name().unwrap(), "config.toml");
    }

    #[test]
    fn log_dir_is_inside_data_dir() {
        let dir = log_dir().unwrap();
        assert!(dir.starts_with(data_dir().unwrap()));
    }
}
