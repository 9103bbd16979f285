//! Configure command handler for editing saved defaults.

use anyhow::{Result, bail};
use inquire::Text;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_TARGET_LANGUAGE, GtlConfig,
};
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::ui::{Style, handle_prompt_cancellation};

/// Prints the saved configuration.
pub fn show_configure() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    println!(
        "{} {}",
        Style::header("Config file"),
        Style::secondary(manager.config_path().display())
    );
    print_current_defaults(&config);
    Ok(())
}

/// Interactively edits model, target language and the API key variable.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let model = prompt_required(
        "Default model:",
        config.gtl.model.as_deref().unwrap_or(DEFAULT_MODEL),
        "Gemini model name, e.g. gemini-2.0-flash",
    )?;
    let to = prompt_required(
        "Default target language:",
        config.gtl.to.as_deref().unwrap_or(DEFAULT_TARGET_LANGUAGE),
        "Language name or code, e.g. Japanese or ja",
    )?;
    let api_key_env = prompt_required(
        "API key environment variable:",
        config.gtl.api_key_env(),
        "gtl reads the API key from this variable",
    )?;

    config.gtl = GtlConfig {
        model: Some(model),
        to: Some(to),
        api_key_env: Some(api_key_env),
        ..config.gtl
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_required(message: &str, default: &str, help: &str) -> Result<String> {
    let value = Text::new(message)
        .with_default(default)
        .with_help_message(help)
        .prompt()?;

    let value = value.trim();
    if value.is_empty() {
        bail!("{} cannot be empty", message.trim_end_matches(':'));
    }
    Ok(value.to_string())
}

fn print_current_defaults(config: &ConfigFile) {
    let gtl = &config.gtl;
    let or_default = |value: Option<&str>, default: &str| {
        value.map_or_else(
            || Style::secondary(format!("{default} (default)")),
            Style::value,
        )
    };

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}        {}",
        Style::label("model"),
        or_default(gtl.model.as_deref(), DEFAULT_MODEL)
    );
    println!(
        "  {}           {}",
        Style::label("to"),
        or_default(gtl.to.as_deref(), DEFAULT_TARGET_LANGUAGE)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        or_default(gtl.endpoint.as_deref(), DEFAULT_ENDPOINT)
    );
    println!(
        "  {}      {}",
        Style::label("timeout"),
        gtl.timeout_secs.map_or_else(
            || Style::secondary(format!("{DEFAULT_TIMEOUT_SECS}s (default)")),
            |secs| Style::value(format!("{secs}s")),
        )
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        or_default(gtl.api_key_env.as_deref(), DEFAULT_API_KEY_ENV)
    );
    println!(
        "  {}      {}",
        Style::label("api_key"),
        if gtl.api_key.is_some() {
            Style::secondary("(set in file)")
        } else {
            Style::secondary("(not set)")
        }
    );
    println!();
}
