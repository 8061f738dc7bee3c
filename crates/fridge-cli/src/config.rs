use fridge_client::ClientConfig;
use fridge_core::DayContext;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Contents of `fridge.toml`.
///
/// ```toml
/// [api]
/// url = "https://api.skincarefridge.example"
/// frontend_url = "https://skincarefridge.example"
/// timeout_secs = 10
///
/// [routine]
/// day = "PM"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FridgeConfig {
    pub api: ApiSection,
    pub routine: RoutineSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub url: String,
    pub frontend_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        let defaults = ClientConfig::default();
        Self {
            url: defaults.api_url,
            frontend_url: defaults.frontend_url,
            timeout_secs: defaults.timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutineSection {
    /// Day context used when `--day` is not given.
    pub day: DayContext,
}

impl FridgeConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// All problems with this configuration; empty when valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for (name, url) in [("api.url", &self.api.url), ("api.frontend_url", &self.api.frontend_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                errors.push(format!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }
        if self.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }
        errors
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_api_url(self.api.url.clone())
            .with_frontend_url(self.api.frontend_url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }
}
