//! Submission configuration.
//!
//! A [`SubmissionConfig`] is supplied fresh on every invocation. It can be
//! built from:
//! - TOML files (default: ~/.config/memoclip/config.toml), `[memoclip]` table
//! - Environment variables (MEMOCLIP_* prefixed)
//!
//! # Example
//!
//! ```rust,no_run
//! use memoclip_core::SubmissionConfig;
//!
//! // Load from default path or fall back to env vars
//! let config = SubmissionConfig::load().expect("Failed to load config");
//!
//! // Or explicitly from a file
//! let config = SubmissionConfig::from_file(std::path::Path::new("memoclip.toml"))
//!     .expect("Failed to load");
//!
//! // Or from environment variables
//! let config = SubmissionConfig::from_env();
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::defaults;
use crate::tags::clamp_max_tags;
use crate::Secret;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid"));

/// Parse the max-tags option.
///
/// Reads a leading integer the way a lenient `parseInt` would: surrounding
/// whitespace and trailing garbage are ignored. A missing, unparseable or zero
/// value falls back to the default; the result is clamped into `[1, 5]`.
pub fn parse_max_tags(raw: &str) -> usize {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return defaults::MAX_TAGS;
    }

    // Overflow means "very large" in either direction.
    let magnitude = unsigned[..digit_len].parse::<u64>().unwrap_or(u64::MAX);
    match (negative, magnitude) {
        (_, 0) => defaults::MAX_TAGS,
        (true, _) => defaults::MAX_TAGS_FLOOR,
        (false, n) => clamp_max_tags(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}

/// Accept `max_tags = "3"` as well as `max_tags = 3` in config files.
fn deserialize_max_tags<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    Ok(match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s,
        StringOrInt::Int(n) => n.to_string(),
    })
}

/// User options for one submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Memos server base URL.
    #[serde(default = "SubmissionConfig::default_api_url")]
    pub api_url: String,
    /// Memos access token.
    #[serde(default)]
    pub api_token: Secret,
    /// Generate tags with the language model.
    #[serde(default = "SubmissionConfig::default_enable_tags")]
    pub enable_tags: bool,
    /// API key for the OpenAI-compatible endpoint.
    #[serde(default)]
    pub openai_api_key: Option<Secret>,
    /// Base URL of the OpenAI-compatible endpoint.
    #[serde(default = "SubmissionConfig::default_openai_base_url")]
    pub openai_base_url: String,
    /// Chat model used for tag generation.
    #[serde(default = "SubmissionConfig::default_openai_model")]
    pub openai_model: String,
    /// Maximum tags per memo, string-encoded as entered by the user.
    #[serde(
        default = "SubmissionConfig::default_max_tags",
        deserialize_with = "deserialize_max_tags"
    )]
    pub max_tags: String,
    /// Per-request timeout in seconds; transport default when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            api_url: Self::default_api_url(),
            api_token: Secret::default(),
            enable_tags: Self::default_enable_tags(),
            openai_api_key: None,
            openai_base_url: Self::default_openai_base_url(),
            openai_model: Self::default_openai_model(),
            max_tags: Self::default_max_tags(),
            timeout_secs: None,
        }
    }
}

impl SubmissionConfig {
    fn default_api_url() -> String {
        defaults::MEMOS_URL.to_string()
    }

    fn default_enable_tags() -> bool {
        defaults::ENABLE_TAGS
    }

    fn default_openai_base_url() -> String {
        defaults::OPENAI_URL.to_string()
    }

    fn default_openai_model() -> String {
        defaults::GEN_MODEL.to_string()
    }

    fn default_max_tags() -> String {
        defaults::MAX_TAGS.to_string()
    }

    /// Memos base URL without trailing slash.
    pub fn api_base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Completion endpoint base URL without trailing slash.
    pub fn completion_base_url(&self) -> &str {
        self.openai_base_url.trim_end_matches('/')
    }

    /// Effective max-tags bound, clamped into `[1, 5]`.
    pub fn max_tags(&self) -> usize {
        parse_max_tags(&self.max_tags)
    }

    /// Tagging runs only when enabled and an API key is present.
    pub fn tagging_enabled(&self) -> bool {
        self.enable_tags
            && self
                .openai_api_key
                .as_ref()
                .map(|k| !k.is_empty())
                .unwrap_or(false)
    }

    /// Get the default config file path.
    ///
    /// Returns: ~/.config/memoclip/config.toml
    pub fn default_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        path.push("memoclip");
        path.push("config.toml");
        path
    }

    /// Load configuration from the default path, falling back to environment variables.
    pub fn load() -> ConfigResult<Self> {
        let path = Self::default_config_path();

        if path.exists() {
            info!("Loading config from: {}", path.display());
            Self::from_file(&path)
        } else {
            debug!(
                "Config file not found at {}, using environment variables",
                path.display()
            );
            Ok(Self::from_env())
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let content = Self::substitute_env_vars(&content);

        #[derive(Deserialize)]
        struct TomlRoot {
            memoclip: SubmissionConfig,
        }

        let root: TomlRoot = toml::from_str(&content)?;
        root.memoclip.validate()?;
        Ok(root.memoclip)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            api_url: lookup("MEMOCLIP_API_URL").unwrap_or(defaults.api_url.clone()),
            api_token: lookup("MEMOCLIP_API_TOKEN")
                .map(Secret::new)
                .unwrap_or_default(),
            enable_tags: lookup("MEMOCLIP_ENABLE_TAGS")
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(defaults.enable_tags),
            openai_api_key: lookup("MEMOCLIP_OPENAI_API_KEY")
                .filter(|v| !v.trim().is_empty())
                .map(Secret::new),
            openai_base_url: lookup("MEMOCLIP_OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url.clone()),
            openai_model: lookup("MEMOCLIP_OPENAI_MODEL").unwrap_or(defaults.openai_model.clone()),
            max_tags: lookup("MEMOCLIP_MAX_TAGS").unwrap_or(defaults.max_tags.clone()),
            timeout_secs: lookup("MEMOCLIP_TIMEOUT_SECS").and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        Self::validate_url("api_url", &self.api_url)?;

        if self.api_token.is_empty() {
            return Err(ConfigError::Validation(
                "api_token cannot be empty".to_string(),
            ));
        }

        if self.enable_tags && self.openai_api_key.is_some() {
            Self::validate_url("openai_base_url", &self.openai_base_url)?;

            if self.openai_model.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "openai_model cannot be empty".to_string(),
                ));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_url(field: &str, value: &str) -> ConfigResult<()> {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", field)));
        }

        // Basic URL validation
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "{} must start with http:// or https://, got: {}",
                field, value
            )));
        }

        Ok(())
    }

    /// Substitute environment variables in the format ${VAR_NAME}.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}
