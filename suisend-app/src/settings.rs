//! User settings persistence via TOML.
//!
//! Settings are stored at `<config_dir>/suisend/settings.toml`.
//! Missing or corrupted config files return sensible defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use suisend_ui::types::ExpiryDuration;

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Connected wallet address shown in the page chrome. Empty hides the
    /// badge; the wallet itself is managed outside this client.
    pub wallet_address: String,
    /// UI theme.
    pub theme: Theme,
    /// Expiry preselected on the transfer form.
    pub default_duration: ExpiryDuration,
}

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wallet_address: String::new(),
            theme: Theme::Light,
            default_duration: ExpiryDuration::ThreeDays,
        }
    }
}

impl Settings {
    /// Load settings from the default config path.
    ///
    /// Returns defaults if the file doesn't exist or is corrupted.
    pub fn load() -> Self {
        Self::load_from_dir(Self::config_dir())
    }

    /// Save settings to the default config path.
    pub fn save(&self) -> Result<()> {
        self.save_to_dir(Self::config_dir())
    }

    /// The wallet address as screen chrome expects it.
    pub fn wallet_address(&self) -> Option<String> {
        let address = self.wallet_address.trim();
        if address.is_empty() {
            None
        } else {
            Some(address.to_string())
        }
    }

    /// Load settings from a specific config directory.
    pub fn load_from_dir(config_dir: PathBuf) -> Self {
        let path = config_dir.join("settings.toml");
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => {
                    tracing::info!(path = %path.display(), "settings loaded");
                    settings
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "corrupted settings file, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %path.display(),
                    "settings file not found, using defaults"
                );
                Self::default()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read settings file, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Save settings to a specific config directory.
    pub fn save_to_dir(&self, config_dir: PathBuf) -> Result<()> {
        std::fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        let path = config_dir.join("settings.toml");
        let contents = toml::to_string_pretty(self).context("failed to serialize settings")?;
        std::fs::write(&path, &contents)
            .with_context(|| format!("failed to write settings file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Get the default config directory.
    fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "suisend")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("suisend-config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn default_settings_are_valid() {
        init_test_tracing();
        let settings = Settings::default();
        assert!(settings.wallet_address.is_empty());
        assert!(settings.wallet_address().is_none());
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.default_duration, ExpiryDuration::ThreeDays);
    }

    #[test]
    fn save_and_load_roundtrip() {
        init_test_tracing();
        let tmp = TempDir::new().unwrap();
        let config_dir = tmp.path().to_path_buf();

        let settings = Settings {
            wallet_address: "0xddkKKjQvPoPQgpoSzhpuwoo".to_string(),
            theme: Theme::Dark,
            default_duration: ExpiryDuration::SevenDays,
        };

        settings.save_to_dir(config_dir.clone()).unwrap();
        let loaded = Settings::load_from_dir(config_dir);

        assert_eq!(settings, loaded);
    }

    #[test]
    fn missing_config_returns_defaults() {
        init_test_tracing();
        let tmp = TempDir::new().unwrap();
        let config_dir = tmp.path().join("nonexistent");

        let loaded = Settings::load_from_dir(config_dir);
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn corrupted_config_returns_defaults() {
        init_test_tracing();
        let tmp = TempDir::new().unwrap();
        let config_dir = tmp.path().to_path_buf();

        // Write garbage to the settings file
        std::fs::write(config_dir.join("settings.toml"), "{{{{not valid toml}}}}").unwrap();

        let loaded = Settings::load_from_dir(config_dir);
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn configured_wallet_address_shows_badge() {
        init_test_tracing();
        let settings = Settings {
            wallet_address: "  0xabc123  ".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.wallet_address().as_deref(), Some("0xabc123"));
    }

    #[test]
    fn all_fields_serialize_correctly() {
        init_test_tracing();
        let settings = Settings {
            wallet_address: "0xfeed".to_string(),
            theme: Theme::Dark,
            default_duration: ExpiryDuration::OneDay,
        };

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let deserialized: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, deserialized);

        assert!(toml_str.contains("wallet_address"));
        assert!(toml_str.contains("theme"));
        assert!(toml_str.contains("default_duration"));
    }
}
