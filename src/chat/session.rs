use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::{self, Write};
use tracing::warn;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::translation::{
    HttpTransport, TranslationClient, TranslationError, TransportError, resolve_language,
};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// Settings of a running chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub endpoint: String,
    pub model: String,
    /// Language name sent to the model.
    pub to: String,
    pub timeout_secs: u64,
    pub api_key: Option<String>,
    pub api_key_env: String,
}

/// An interactive chat session for translation.
///
/// Each line is translated independently; nothing typed earlier is sent
/// again.
pub struct ChatSession {
    config: SessionConfig,
    client: TranslationClient<HttpTransport>,
}

impl ChatSession {
    pub fn new(config: SessionConfig) -> Result<Self, TransportError> {
        let client = Self::build_client(&config)?;
        Ok(Self { config, client })
    }

    fn build_client(
        config: &SessionConfig,
    ) -> Result<TranslationClient<HttpTransport>, TransportError> {
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

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, 'exit' to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => ui::print_notice("Please enter some text to translate."),
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => self.translate_and_print(&text).await?,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Applies a slash command. Returns `false` when the session should end.
    pub fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::To(None) => ui::print_error("Usage: /to <language>"),
            SlashCommand::To(Some(lang)) => self.set_to(&lang),
            SlashCommand::Model(None) => ui::print_error("Usage: /model <name>"),
            SlashCommand::Model(Some(model)) => self.set_model(model),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd} (try /help)"));
            }
        }
        true
    }

    fn set_to(&mut self, lang: &str) {
        self.config.to = resolve_language(lang);
        println!(
            "{} Target language set to {}",
            Style::success("✓"),
            Style::value(&self.config.to)
        );
    }

    fn set_model(&mut self, model: String) {
        let mut next = self.config.clone();
        next.model = model;

        match Self::build_client(&next) {
            Ok(client) => {
                self.client = client;
                self.config = next;
                println!(
                    "{} Model set to {}",
                    Style::success("✓"),
                    Style::value(&self.config.model)
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    /// Translates one line. Classified failures are printed and the session
    /// continues; only terminal write errors end it.
    async fn translate_and_print(&self, text: &str) -> Result<()> {
        let spinner = Spinner::new("Translating...");
        let result = self.client.translate(text, &self.config.to).await;
        spinner.stop();

        match result {
            Ok(translated) => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}\n", Style::value(translated))?;
                stdout.flush()?;
            }
            Err(err @ TranslationError::InvalidInput(_)) => ui::print_notice(&err.to_string()),
            Err(err) => {
                warn!(error = %err, "translation failed");
                ui::print_error(&err.to_string());
            }
        }
        Ok(())
    }
}
