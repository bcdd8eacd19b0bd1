use crate::{McTestError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Reporter settings (`[report]` table)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Colorize console output
    pub color: bool,
    /// Print the debug detail of contained errors
    pub error_detail: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: true,
            error_detail: true,
        }
    }
}

/// Full `mctest.toml`
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct McTestConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Config file loader
pub struct ConfigLoader;

impl ConfigLoader {
    const CONFIG_FILE: &'static str = "mctest.toml";

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<McTestConfig> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            McTestError::ConfigError(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Lookup order:
    /// 1. current directory, then each parent
    /// 2. ~/.config/mctest/
    ///
    /// Falls back to defaults when nothing is found or the file is broken.
    pub fn find_and_load() -> McTestConfig {
        let config = Self::try_load_from_current_dir()
            .or_else(Self::try_load_from_user_dir)
            .unwrap_or_default();
        Self::apply_env(config)
    }

    /// `NO_COLOR` (any value) disables color
    pub fn apply_env(mut config: McTestConfig) -> McTestConfig {
        if std::env::var_os("NO_COLOR").is_some() {
            config.report.color = false;
        }
        config
    }

    fn try_load_from_current_dir() -> Option<McTestConfig> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                return Self::load_logged(&config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    fn try_load_from_user_dir() -> Option<McTestConfig> {
        let home = dirs::home_dir()?;
        let config_path = home.join(".config").join("mctest").join(Self::CONFIG_FILE);

        if config_path.exists() {
            Self::load_logged(&config_path)
        } else {
            None
        }
    }

    fn load_logged(path: &Path) -> Option<McTestConfig> {
        match Self::load_from_path(path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                None
            }
        }
    }
}
