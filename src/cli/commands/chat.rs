use anyhow::Result;
use inquire::{Password, PasswordDisplayMode};

use super::translate::announce_key_source;
use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, KeySource, ResolveOptions, ResolvedConfig, resolve_config};
use crate::translation::TranslationError;
use crate::ui::is_prompt_cancelled;

pub struct ChatOptions {
    pub resolve: ResolveOptions,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = resolve_config(&options.resolve, &manager.load_or_default()?)?;

    if config.api_key.is_none() {
        prompt_for_api_key(&mut config)?;
    }
    announce_key_source(&config);

    let mut session = ChatSession::new(SessionConfig {
        endpoint: config.endpoint,
        model: config.model,
        to: config.target_language,
        timeout_secs: config.timeout_secs,
        api_key: config.api_key,
        api_key_env: config.api_key_env,
    })?;
    session.run().await
}

/// Asks for the key when neither the environment nor the config file has one.
///
/// The key lives only for this session and is never written to disk.
fn prompt_for_api_key(config: &mut ResolvedConfig) -> Result<()> {
    let answer = Password::new("Please enter your Gemini API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message(&format!(
            "Set {} to skip this prompt next time",
            config.api_key_env
        ))
        .prompt();

    let key = match answer {
        Ok(key) => key,
        Err(e) if is_prompt_cancelled(&e) => String::new(),
        Err(e) => return Err(e.into()),
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(TranslationError::missing_credential(&config.api_key_env).into());
    }

    config.api_key = Some(key.to_string());
    config.key_source = Some(KeySource::Prompt);
    Ok(())
}
