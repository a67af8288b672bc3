//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Store file path
    pub store: Option<PathBuf>,

    /// Editor command for multi-line note entry and edits
    pub editor: Option<String>,

    /// Picker command for the interactive workflow
    pub picker: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the store file path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--store` argument
    /// 2. Config file `store` setting
    /// 3. `~/.jot.json`
    pub fn store_path(&self, cli_store: Option<&PathBuf>) -> PathBuf {
        cli_store
            .cloned()
            .or_else(|| self.store.clone())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".jot.json")
            })
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "nano" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "nano".to_string())
    }

    /// Resolve the picker command, if one overrides the fzf default.
    ///
    /// Precedence order:
    /// 1. Config file `picker` setting
    /// 2. $JOT_PICKER environment variable
    /// 3. None (caller uses the built-in fzf invocation)
    pub fn picker(&self) -> Option<String> {
        self.picker
            .clone()
            .or_else(|| std::env::var("JOT_PICKER").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.store.is_none());
        assert!(config.editor.is_none());
        assert!(config.picker.is_none());
    }

    #[test]
    fn store_path_prefers_cli_arg() {
        let config = Config {
            store: Some(PathBuf::from("/config/store.json")),
            ..Default::default()
        };
        let cli_store = PathBuf::from("/cli/store.json");
        assert_eq!(
            config.store_path(Some(&cli_store)),
            PathBuf::from("/cli/store.json")
        );
    }

    #[test]
    fn store_path_falls_back_to_config() {
        let config = Config {
            store: Some(PathBuf::from("/config/store.json")),
            ..Default::default()
        };
        assert_eq!(config.store_path(None), PathBuf::from("/config/store.json"));
    }

    #[test]
    fn store_path_defaults_to_home_file() {
        let config = Config::default();
        assert!(config.store_path(None).ends_with(".jot.json"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("jot/config.toml"));
    }

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
            store = "/tmp/notes.json"
            editor = "code --wait"
            picker = "fzf --multi"
            "#,
        )
        .unwrap();
        assert_eq!(config.store, Some(PathBuf::from("/tmp/notes.json")));
        assert_eq!(config.editor.as_deref(), Some("code --wait"));
        assert_eq!(config.picker.as_deref(), Some("fzf --multi"));
    }
}
