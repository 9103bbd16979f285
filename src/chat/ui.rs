//! Chat mode UI components.

use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("gtl"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary(format!(
            "Translating to {} with {}. Type 'exit' to quit.",
            config.to, config.model
        ))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        Style::value(&config.to)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        Style::secondary(format!("{}s", config.timeout_secs))
    );
    println!(
        "  {}    {}",
        Style::label("api key"),
        if config.api_key.is_some() {
            Style::secondary("(set)")
        } else {
            Style::warning(format!("(not set, export {})", config.api_key_env))
        }
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/to <language>", "Change target language (name or code)"),
        ("/model <name>", "Switch model"),
        ("/quit", "Exit chat mode (or type 'exit')"),
    ];
    for (cmd, description) in commands {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:<15}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_notice(message: &str) {
    eprintln!("{}", Style::warning(message));
}

pub fn print_error(message: &str) {
    crate::ui::print_error(message);
    eprintln!();
}
