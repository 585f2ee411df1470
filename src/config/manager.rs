use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Settings in the `[engine]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineSection {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Model name used for translation and detection requests.
    pub model: Option<String>,
    /// Default target language (ISO 639-1 code).
    pub to: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl EngineSection {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lingo/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Engine settings.
    #[serde(default)]
    pub engine: EngineSection,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for translation.
    pub model: String,
    /// The API key (if configured).
    pub api_key: Option<String>,
    /// The target language code (if resolved).
    pub target_language: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language code override.
    pub to: Option<String>,
    /// Endpoint URL override.
    pub endpoint: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if the endpoint or model is missing from both sources.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.engine.endpoint.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'endpoint'\n\n\
                 Please provide it via:\n  \
                 - CLI option: lingo --endpoint <url>\n  \
                 - Config file: ~/.config/lingo/config.toml"
            )
        })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.engine.model.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'model'\n\n\
                 Please provide it via:\n  \
                 - CLI option: lingo --model <name>\n  \
                 - Config file: ~/.config/lingo/config.toml"
            )
        })?;

    let target_language = options
        .to
        .as_ref()
        .or(config_file.engine.to.as_ref())
        .cloned();

    let api_key = config_file.engine.get_api_key();

    // An api_key_env that resolves to nothing is a configuration mistake
    // worth failing loudly on, rather than sending unauthenticated requests.
    if config_file.engine.api_key_env.is_some() && api_key.is_none() {
        let env_var = config_file
            .engine
            .api_key_env
            .as_deref()
            .unwrap_or("API_KEY");
        bail!(
            "The configured API key environment variable is not set\n\n\
             Set it first:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/lingo/config.toml"
        );
    }

    Ok(ResolvedConfig {
        endpoint,
        model,
        api_key,
        target_language,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/lingo/config.toml`
    /// or `~/.config/lingo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
