use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::ToggleConfig;

pub fn config_dir() -> PathBuf {
    // Prefer ~/.config/comment-toggle on Unix-like systems so dotfile
    // managers find it
    if let Some(home) = dirs::home_dir() {
        let xdg_config = home.join(".config").join("comment-toggle");
        if xdg_config.exists() || cfg!(unix) {
            return xdg_config;
        }
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("comment-toggle")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load the user config, falling back to defaults when there is none.
pub fn load_config() -> Result<ToggleConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<ToggleConfig> {
    if !path.exists() {
        log::debug!("no config at {:?}, using defaults", path);
        return Ok(ToggleConfig::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {:?}", path))?;

    let config: ToggleConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {:?}", path))?;

    Ok(config)
}

pub fn save_config_to(path: &Path, config: &ToggleConfig) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
    }

    let content = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;

    fs::write(path, content).with_context(|| format!("Failed to write config: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_xdg() {
        let path = config_path();
        if cfg!(unix) {
            assert!(path.to_string_lossy().contains(".config/comment-toggle"));
        }
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ToggleConfig::default());
        assert!(!dir.path().join("absent.toml").exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = ToggleConfig {
            padding: false,
            ignore: Some(r"^\s*$".to_string()),
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "padding = \"yes\"").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        assert!(err.to_string().contains("config.toml"));
    }
}
