use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, resolve_language};

/// Environment variable read for the API key unless configured otherwise.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Target language used when neither the CLI nor the config file names one.
pub const DEFAULT_TARGET_LANGUAGE: &str = "Japanese";

/// Settings in the `[gtl]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GtlConfig {
    /// Default model name.
    pub model: Option<String>,
    /// Default target language (a name, or a code such as `ja`).
    pub to: Option<String>,
    /// Base URL of the generation API.
    pub endpoint: Option<String>,
    /// Upper bound on a single request, in seconds.
    pub timeout_secs: Option<u64>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
}

impl GtlConfig {
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtl: GtlConfig,
}

/// Where the resolved API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    ConfigFile,
    Prompt,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    /// Language name sent to the model.
    pub target_language: String,
    pub timeout_secs: u64,
    /// The API key, if one was found. Absence is reported by the client.
    pub api_key: Option<String>,
    /// Variable consulted for the key, used in error hints.
    pub api_key_env: String,
    pub key_source: Option<KeySource>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub to: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration from CLI options, the config file and the process
/// environment.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    resolve_config_with_env(options, config_file, |name| std::env::var(name).ok())
}

/// Like [`resolve_config`], with the environment lookup supplied by the caller.
///
/// Priority for every setting is CLI option, then config file, then built-in
/// default. The API key prefers the environment variable over the file.
///
/// # Errors
///
/// Returns an error if a setting resolves to an unusable value (blank model,
/// blank language, zero timeout).
pub fn resolve_config_with_env<F>(
    options: &ResolveOptions,
    config_file: &ConfigFile,
    env: F,
) -> Result<ResolvedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file = &config_file.gtl;

    let model = options
        .model
        .as_ref()
        .or(file.model.as_ref())
        .map_or(DEFAULT_MODEL, String::as_str)
        .trim()
        .to_string();
    if model.is_empty() {
        bail!(
            "Model name must not be empty\n\n\
             Please provide it via:\n  \
             - CLI option: gtl --model <name>\n  \
             - Config file: ~/.config/gtl/config.toml"
        );
    }

    let target_language = resolve_language(
        options
            .to
            .as_ref()
            .or(file.to.as_ref())
            .map_or(DEFAULT_TARGET_LANGUAGE, String::as_str),
    );
    if target_language.is_empty() {
        bail!(
            "Target language must not be empty\n\n\
             Please provide it via:\n  \
             - CLI option: gtl --to <language>\n  \
             - Config file: ~/.config/gtl/config.toml"
        );
    }

    let timeout_secs = options
        .timeout_secs
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        bail!("Timeout must be at least 1 second");
    }

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| file.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let api_key_env = file.api_key_env().to_string();
    let (api_key, key_source) = match env(&api_key_env).filter(|key| !key.trim().is_empty()) {
        Some(key) => (Some(key), Some(KeySource::Environment)),
        None => match file.api_key.clone().filter(|key| !key.trim().is_empty()) {
            Some(key) => (Some(key), Some(KeySource::ConfigFile)),
            None => (None, None),
        },
    };

    debug!(%endpoint, %model, %target_language, timeout_secs, ?key_source, "resolved configuration");

    Ok(ResolvedConfig {
        endpoint,
        model,
        target_language,
        timeout_secs,
        api_key,
        api_key_env,
        key_source,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/gtl/config.toml`
    /// or `~/.config/gtl/config.toml` if `XDG_CONFIG_HOME` is not set.
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

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        self.load()
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
        })?;

        Ok(())
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

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            gtl: GtlConfig {
                model: Some("gemini-1.5-pro".to_string()),
                to: Some("ja".to_string()),
                endpoint: None,
                timeout_secs: Some(10),
                api_key_env: Some("MY_GEMINI_KEY".to_string()),
                api_key: None,
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.gtl.model, Some("gemini-1.5-pro".to_string()));
        assert_eq!(loaded.gtl.to, Some("ja".to_string()));
        assert_eq!(loaded.gtl.timeout_secs, Some(10));
        assert_eq!(loaded.gtl.api_key_env(), "MY_GEMINI_KEY");
        assert!(loaded.gtl.endpoint.is_none());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nested/gtl/config.toml"));

        manager.save(&ConfigFile::default()).unwrap();

        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        let config = manager.load_or_default().unwrap();
        assert!(config.gtl.model.is_none());
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[gtl\nmodel = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_ignores_unknown_sections() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(
            manager.config_path(),
            "[gtl]\nto = \"fr\"\n\n[something_else]\nkey = 1\n",
        )
        .unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.gtl.to, Some("fr".to_string()));
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved =
            resolve_config_with_env(&ResolveOptions::default(), &ConfigFile::default(), no_env)
                .unwrap();

        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.target_language, DEFAULT_TARGET_LANGUAGE);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(resolved.api_key_env, DEFAULT_API_KEY_ENV);
        assert!(resolved.api_key.is_none());
        assert!(resolved.key_source.is_none());
    }

    #[test]
    fn test_resolve_language_code_becomes_name() {
        let options = ResolveOptions {
            to: Some("de".to_string()),
            ..ResolveOptions::default()
        };
        let resolved =
            resolve_config_with_env(&options, &ConfigFile::default(), no_env).unwrap();
        assert_eq!(resolved.target_language, "German");
    }

    #[test]
    fn test_resolve_key_prefers_environment() {
        let mut config = ConfigFile::default();
        config.gtl.api_key = Some("file-key".to_string());

        let resolved = resolve_config_with_env(&ResolveOptions::default(), &config, |name| {
            (name == DEFAULT_API_KEY_ENV).then(|| "env-key".to_string())
        })
        .unwrap();

        assert_eq!(resolved.api_key, Some("env-key".to_string()));
        assert_eq!(resolved.key_source, Some(KeySource::Environment));
    }

    #[test]
    fn test_resolve_key_falls_back_to_file() {
        let mut config = ConfigFile::default();
        config.gtl.api_key = Some("file-key".to_string());

        let resolved = resolve_config_with_env(&ResolveOptions::default(), &config, |_| {
            Some(String::new())
        })
        .unwrap();

        assert_eq!(resolved.api_key, Some("file-key".to_string()));
        assert_eq!(resolved.key_source, Some(KeySource::ConfigFile));
    }

    #[test]
    fn test_resolve_custom_key_env() {
        let mut config = ConfigFile::default();
        config.gtl.api_key_env = Some("OTHER_KEY".to_string());

        let resolved = resolve_config_with_env(&ResolveOptions::default(), &config, |name| {
            (name == "OTHER_KEY").then(|| "other".to_string())
        })
        .unwrap();

        assert_eq!(resolved.api_key, Some("other".to_string()));
        assert_eq!(resolved.api_key_env, "OTHER_KEY");
    }

    #[test]
    fn test_resolve_rejects_zero_timeout() {
        let options = ResolveOptions {
            timeout_secs: Some(0),
            ..ResolveOptions::default()
        };
        let err =
            resolve_config_with_env(&options, &ConfigFile::default(), no_env).unwrap_err();
        assert!(err.to_string().contains("Timeout"));
    }

    #[test]
    fn test_resolve_rejects_blank_language() {
        let options = ResolveOptions {
            to: Some("   ".to_string()),
            ..ResolveOptions::default()
        };
        let err =
            resolve_config_with_env(&options, &ConfigFile::default(), no_env).unwrap_err();
        assert!(err.to_string().contains("Target language"));
    }
}
