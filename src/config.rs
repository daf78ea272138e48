use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Local image shown when a photo's image can't be loaded
    #[serde(default)]
    pub placeholder_image: Option<PathBuf>,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_api_url() -> String {
    "http://localhost:4000/pictures".to_string()
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            placeholder_image: None,
            toast_duration_ms: default_toast_duration_ms(),
            image_preview_enabled: true,
            image_protocol: default_image_protocol(),
            vim_mode: false,
        }
    }
}

impl Config {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid config with every default
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&text)
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists anywhere; the built-in
/// defaults are used then.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/photogrid/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("photogrid").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:4000/pictures");
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert!(config.placeholder_image.is_none());
        assert!(config.image_preview_enabled);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("api_url: http://example.com/pictures\nvim_mode: true\n").unwrap();
        assert_eq!(config.api_url, "http://example.com/pictures");
        assert!(config.vim_mode);
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.image_protocol, "auto");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.api_url, default_api_url());
    }

    #[test]
    fn test_placeholder_path() {
        let config = Config::from_yaml("placeholder_image: /tmp/placeholder.png\n").unwrap();
        assert_eq!(
            config.placeholder_image,
            Some(PathBuf::from("/tmp/placeholder.png"))
        );
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("toast_duration_ms: [1, 2]").is_err());
    }

    #[test]
    fn test_missing_cli_config_is_error() {
        let result = get_config_path(Some("/definitely/not/here.yaml".to_string()));
        assert!(result.is_err());
    }
}
