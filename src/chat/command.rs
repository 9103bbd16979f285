use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/model", "Switch model: /model <name>"),
    ("/quit", "Exit chat mode"),
    ("/to", "Change target language: /to <language>"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(' ') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
    /// `/to` with an optional language; `None` prints usage.
    To(Option<String>),
    /// `/model` with an optional name; `None` prints usage.
    Model(Option<String>),
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    if trimmed.eq_ignore_ascii_case("exit") {
        return Input::Command(SlashCommand::Quit);
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(trimmed.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    match name {
        "config" => Input::Command(SlashCommand::Config),
        "help" => Input::Command(SlashCommand::Help),
        "quit" | "exit" | "q" => Input::Command(SlashCommand::Quit),
        "to" => Input::Command(SlashCommand::To(argument)),
        "model" => Input::Command(SlashCommand::Model(argument)),
        _ => Input::Command(SlashCommand::Unknown(cmd.to_string())),
    }
}
