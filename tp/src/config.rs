//! Tripplan configuration types and loading

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

/// Main tripplan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Plan generation parameters
    pub planner: PlannerConfig,

    /// Output and report configuration
    pub output: OutputConfig,

    /// Log level from the config file (the CLI flag wins)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path > `.tripplan.yml` in the working directory >
    /// `~/.config/tripplan/tripplan.yml` > built-in defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".tripplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripplan").join("tripplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Peek at the configured log level before full config loading
    ///
    /// Logging has to come up before the config is properly loaded, so this
    /// swallows every error and just returns the level if one is set.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
///
/// The default endpoint is the Hugging Face inference router, which speaks
/// the OpenAI chat-completions protocol. Any OpenAI-compatible host works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name ("huggingface" or "openai")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// File to read the API key from when the env var is not set
    #[serde(rename = "api-key-file")]
    pub api_key_file: Option<PathBuf>,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "huggingface".to_string(),
            model: "meta-llama/Meta-Llama-3-8B-Instruct".to_string(),
            api_key_env: "HF_TOKEN".to_string(),
            api_key_file: None,
            base_url: "https://router.huggingface.co".to_string(),
            timeout_ms: 120_000,
        }
    }
}

impl LlmConfig {
    /// Validate and resolve the provider configuration
    pub fn resolve(&self) -> Result<ResolvedLlmConfig> {
        if self.model.trim().is_empty() {
            return Err(eyre!("LLM model must not be empty"));
        }
        if self.base_url.trim().is_empty() {
            return Err(eyre!("LLM base-url must not be empty"));
        }

        Ok(ResolvedLlmConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key_env: self.api_key_env.clone(),
            api_key_file: self.api_key_file.clone(),
            timeout_ms: self.timeout_ms,
        })
    }
}

/// A validated LLM configuration, ready to build a client from
#[derive(Debug, Clone)]
pub struct ResolvedLlmConfig {
    pub provider: String,
    pub model: String,
    pub base_url: String,
    pub api_key_env: String,
    pub api_key_file: Option<PathBuf>,
    pub timeout_ms: u64,
}

impl ResolvedLlmConfig {
    /// Read the API key from the environment or the configured key file
    pub fn get_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(&self.api_key_env)
            && !key.trim().is_empty()
        {
            return Ok(key.trim().to_string());
        }

        if let Some(path) = &self.api_key_file {
            let key = fs::read_to_string(path).context(format!("Failed to read api-key-file {}", path.display()))?;
            let key = key.trim();
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }

        Err(eyre!(
            "API key not found. Set the {} environment variable or configure api-key-file.",
            self.api_key_env
        ))
    }
}

/// Plan generation parameters
///
/// Token budgets and temperatures per prompt kind. The itinerary runs a
/// little hotter than the factual sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// How many budget stays to ask for
    #[serde(rename = "stays-count")]
    pub stays_count: u32,

    /// Max tokens for the day-wise itinerary
    #[serde(rename = "itinerary-max-tokens")]
    pub itinerary_max_tokens: u32,

    /// Max tokens for the stays shortlist
    #[serde(rename = "stays-max-tokens")]
    pub stays_max_tokens: u32,

    /// Max tokens for the travel options section
    #[serde(rename = "travel-max-tokens")]
    pub travel_max_tokens: u32,

    /// Sampling temperature for the itinerary
    #[serde(rename = "itinerary-temperature")]
    pub itinerary_temperature: f32,

    /// Sampling temperature for the stays and travel sections
    #[serde(rename = "section-temperature")]
    pub section_temperature: f32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            stays_count: 4,
            itinerary_max_tokens: 900,
            stays_max_tokens: 200,
            travel_max_tokens: 300,
            itinerary_temperature: 0.7,
            section_temperature: 0.6,
        }
    }
}

/// Output and report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default path for the plan document
    #[serde(rename = "report-file")]
    pub report_file: String,

    /// Base URL for map links
    #[serde(rename = "maps-base-url")]
    pub maps_base_url: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_file: "travel-plan.txt".to_string(),
            maps_base_url: "https://www.google.com/maps".to_string(),
        }
    }
}
