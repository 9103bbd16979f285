use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtl")]
#[command(about = "Translate text from the terminal with the Gemini API")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads FILE or stdin if not provided)
    pub text: Option<String>,

    /// Read the text to translate from a file
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honors NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Overrides shared by one-shot translation and chat mode.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Target language name or code (e.g. Japanese, ja, "Brazilian Portuguese")
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Model name (e.g. gemini-2.0-flash)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive translation session
    Chat {
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Edit or show saved defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List language code shorthands
    Languages,
}
