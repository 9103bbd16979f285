use anyhow::Result;
use std::io::{self, Write};

use crate::config::{ConfigManager, KeySource, ResolveOptions, ResolvedConfig, resolve_config};
use crate::input::InputReader;
use crate::status;
use crate::translation::{HttpTransport, TranslationClient};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub resolve: ResolveOptions,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = resolve_config(&options.resolve, &manager.load_or_default()?)?;

    let source_text = match options.text {
        Some(text) => text,
        None => InputReader::read(options.file.as_deref())?,
    };

    let client = build_client(&config)?;
    announce_key_source(&config);

    let spinner = Spinner::new("Translating...");
    let translated = client
        .translate(&source_text, &config.target_language)
        .await;
    spinner.stop();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", translated?)?;
    stdout.flush()?;

    Ok(())
}

/// Builds the production client from resolved settings.
pub fn build_client(config: &ResolvedConfig) -> Result<TranslationClient<HttpTransport>> {
    let transport = HttpTransport::new(
        config.endpoint.clone(),
        config.model.clone(),
        config.timeout_secs,
    )?;
    Ok(TranslationClient::new(
        transport,
        config.api_key.clone(),
        config.api_key_env.clone(),
    ))
}

pub fn announce_key_source(config: &ResolvedConfig) {
    match config.key_source {
        Some(KeySource::Environment) => status!(
            "{}",
            Style::secondary(format!(
                "Using API key from {} environment variable.",
                config.api_key_env
            ))
        ),
        Some(KeySource::ConfigFile) => {
            status!("{}", Style::secondary("Using API key from config file."));
        }
        Some(KeySource::Prompt) | None => {}
    }
}
