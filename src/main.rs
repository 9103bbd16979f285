use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use gtl_cli::cli::commands::{chat, configure, translate};
use gtl_cli::cli::{Args, Command, SettingsArgs};
use gtl_cli::config::ResolveOptions;
use gtl_cli::translation::{TranslationError, print_languages};
use gtl_cli::{logging, output, ui};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    output::init(output::OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose, output::is_no_color());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&format!("{err:#}"));
            let code = err
                .downcast_ref::<TranslationError>()
                .map_or(exitcode::SOFTWARE, TranslationError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Command::Configure { show: true }) => configure::show_configure(),
        Some(Command::Configure { show: false }) => configure::run_configure(),
        Some(Command::Chat { settings }) => {
            chat::run_chat(chat::ChatOptions {
                resolve: resolve_options(settings),
            })
            .await
        }
        None if args.text.is_none() && args.file.is_none() && std::io::stdin().is_terminal() => {
            chat::run_chat(chat::ChatOptions {
                resolve: resolve_options(args.settings),
            })
            .await
        }
        None => {
            translate::run_translate(translate::TranslateOptions {
                text: args.text,
                file: args.file,
                resolve: resolve_options(args.settings),
            })
            .await
        }
    }
}

fn resolve_options(settings: SettingsArgs) -> ResolveOptions {
    ResolveOptions {
        to: settings.to,
        model: settings.model,
        endpoint: settings.endpoint,
        timeout_secs: settings.timeout_secs,
    }
}
