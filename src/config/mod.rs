//! Configuration file management and setting resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_TARGET_LANGUAGE, GtlConfig, KeySource,
    ResolveOptions, ResolvedConfig, resolve_config, resolve_config_with_env,
};
