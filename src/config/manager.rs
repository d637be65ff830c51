use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::credential::DEFAULT_API_KEY_ENV;
use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{ClientSettings, DEFAULT_TEMPERATURE, ModelPreference, PipelineOptions};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_REFERER: &str = "https://localhost";
pub const DEFAULT_TITLE: &str = "light-copy-translator";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 30;

/// Settings in the `[lct]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LctConfig {
    /// OpenAI-compatible API root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Pinned model; when set the catalog is not consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_timeout_secs: Option<u64>,
    /// Value of the `HTTP-Referer` attribution header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    /// Value of the `X-Title` attribution header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Model preference policy overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<ModelPreference>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lct/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub lct: LctConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Effective configuration after merging CLI options, the config file and
/// built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    /// `None` means automatic selection from the catalog.
    pub model: Option<String>,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub catalog_timeout: Duration,
    pub completion_timeout: Duration,
    pub referer: String,
    pub title: String,
    pub preference: ModelPreference,
}

impl ResolvedConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            referer: self.referer.clone(),
            title: self.title.clone(),
            catalog_timeout: self.catalog_timeout,
            completion_timeout: self.completion_timeout,
        }
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            pinned_model: self.model.clone(),
            preference: self.preference.clone(),
            temperature: self.temperature,
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Normalizes an API root: trims whitespace and trailing slashes, and
/// appends `/api/v1` to a bare host.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let value = raw.trim().trim_end_matches('/');

    let Some(rest) = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    else {
        bail!("Invalid base URL: '{raw}'\n\nThe base URL must start with http:// or https://");
    };

    if rest.is_empty() {
        bail!("Invalid base URL: '{raw}'\n\nThe base URL has no host");
    }

    if rest.contains('/') {
        Ok(value.to_string())
    } else {
        Ok(format!("{value}/api/v1"))
    }
}

fn timeout(secs: Option<u64>, default: u64, key: &str) -> Result<Duration> {
    match secs.unwrap_or(default) {
        0 => bail!("Invalid configuration: '{key}' must be greater than 0"),
        secs => Ok(Duration::from_secs(secs)),
    }
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the base URL is malformed, the temperature is outside
/// `[0, 2]`, or a timeout is zero.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.lct;

    let base_url = non_blank(options.base_url.as_ref())
        .or_else(|| non_blank(file.base_url.as_ref()))
        .map_or_else(
            || Ok(DEFAULT_BASE_URL.to_string()),
            |url| normalize_base_url(&url),
        )?;

    let model = non_blank(options.model.as_ref()).or_else(|| non_blank(file.model.as_ref()));

    let temperature = file.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        bail!("Invalid configuration: 'temperature' must be between 0 and 2 (got {temperature})");
    }

    Ok(ResolvedConfig {
        base_url,
        model,
        api_key_env: non_blank(file.api_key_env.as_ref())
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
        api_key: non_blank(file.api_key.as_ref()),
        temperature,
        catalog_timeout: timeout(
            file.catalog_timeout_secs,
            DEFAULT_CATALOG_TIMEOUT_SECS,
            "catalog_timeout_secs",
        )?,
        completion_timeout: timeout(
            file.completion_timeout_secs,
            DEFAULT_COMPLETION_TIMEOUT_SECS,
            "completion_timeout_secs",
        )?,
        referer: non_blank(file.referer.as_ref()).unwrap_or_else(|| DEFAULT_REFERER.to_string()),
        title: non_blank(file.title.as_ref()).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        preference: file.selection.clone().unwrap_or_default(),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/lct/config.toml`
    /// or `~/.config/lct/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit file location.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, or defaults when it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            log::debug!(
                "no config file at {}, using defaults",
                self.config_path.display()
            );
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            lct: LctConfig {
                base_url: Some("https://openrouter.ai/api/v1".to_string()),
                api_key_env: Some("MY_OPENROUTER_KEY".to_string()),
                model: Some("deepseek/deepseek-chat".to_string()),
                temperature: Some(0.5),
                selection: Some(ModelPreference {
                    preferred: vec!["deepseek/deepseek-v3".to_string()],
                    ..ModelPreference::default()
                }),
                ..LctConfig::default()
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[lct\nmodel = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_partial_selection_keeps_defaults() {
        let config: ConfigFile = toml::from_str(
            r#"
            [lct.selection]
            vendor_prefix = "meta-llama/"
            "#,
        )
        .unwrap();

        let selection = config.lct.selection.unwrap();
        assert_eq!(selection.vendor_prefix, "meta-llama/");
        assert_eq!(selection.capability_hint, "chat");
        assert_eq!(selection.preferred, ModelPreference::default().preferred);
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.model, None);
        assert_eq!(resolved.api_key_env, "OPENROUTER_API_KEY");
        assert!((resolved.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(resolved.catalog_timeout, Duration::from_secs(15));
        assert_eq!(resolved.completion_timeout, Duration::from_secs(30));
        assert_eq!(resolved.referer, "https://localhost");
        assert_eq!(resolved.title, "light-copy-translator");
        assert_eq!(resolved.preference, ModelPreference::default());
    }

    #[test]
    fn test_resolve_blank_model_means_auto() {
        let config = ConfigFile {
            lct: LctConfig {
                model: Some("  ".to_string()),
                ..LctConfig::default()
            },
        };
        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();
        assert_eq!(resolved.model, None);
    }

    #[test]
    fn test_resolve_rejects_temperature_out_of_range() {
        let config = ConfigFile {
            lct: LctConfig {
                temperature: Some(2.5),
                ..LctConfig::default()
            },
        };
        let err = resolve_config(&ResolveOptions::default(), &config).unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_resolve_rejects_zero_timeout() {
        let config = ConfigFile {
            lct: LctConfig {
                completion_timeout_secs: Some(0),
                ..LctConfig::default()
            },
        };
        let err = resolve_config(&ResolveOptions::default(), &config).unwrap_err();
        assert!(err.to_string().contains("completion_timeout_secs"));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" https://openrouter.ai/api/v1/ ").unwrap(),
            "https://openrouter.ai/api/v1"
        );
        assert_eq!(
            normalize_base_url("https://openrouter.ai").unwrap(),
            "https://openrouter.ai/api/v1"
        );
        assert_eq!(
            normalize_base_url("http://localhost:11434/v1").unwrap(),
            "http://localhost:11434/v1"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_missing_scheme() {
        assert!(normalize_base_url("openrouter.ai/api/v1").is_err());
        assert!(normalize_base_url("https://").is_err());
    }
}
