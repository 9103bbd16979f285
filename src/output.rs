//! Process-wide output settings.
//!
//! Translations go to stdout so they can be piped; status lines, the spinner
//! and errors go to stderr. `--quiet` silences status lines only.

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress status lines.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the settings from CLI flags, honoring `NO_COLOR`.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || no_color_env(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_flags(false, false)
    }
}

// https://no-color.org/
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Sets the global output configuration. Only the first call takes effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}
