use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.gpt.ge/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Settings of the chat completion service used for listing copy.
///
/// The key starts out empty; a missing key is reported when an optimization
/// is attempted, not when the configuration is loaded.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

/// Partial update; only the provided fields replace the current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfigUpdate {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
        }
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "<unset>" })
            .finish()
    }
}

impl AiConfig {
    /// Load from `config/default`, `config/local`, `.env` and `RESALE_AI__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let s = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("RESALE_AI").separator("__"))
            .build()?;

        let config: AiConfig = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a single file, format chosen by its extension.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let s = Self::defaults()?.add_source(File::from(path)).build()?;

        let config: AiConfig = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("model", DEFAULT_MODEL)?
            .set_default("api_key", "")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => return Err(ConfigError::Message("Invalid base URL format".into())),
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::Message("Model must not be empty".into()));
        }

        Ok(())
    }

    pub fn merge(&mut self, update: AiConfigUpdate) {
        if let Some(base_url) = update.base_url {
            self.base_url = base_url;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(api_key) = update.api_key {
            self.api_key = api_key;
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
