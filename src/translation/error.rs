//! Classified failures of a translation call.

use thiserror::Error;

/// Everything that can go wrong while translating a single piece of text.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The source text or target language was empty.
    #[error("{0}")]
    InvalidInput(String),

    /// The credential is missing or unusable.
    #[error("{message}\n\n{hint}")]
    Configuration { message: String, hint: String },

    /// The request never produced an HTTP response (connect failure, timeout).
    #[error("Translation unavailable: {0}")]
    Network(String),

    /// The service answered, but not with a usable translation.
    #[error("{}", upstream_message(.status, .message))]
    Upstream { status: Option<u16>, message: String },
}

#[allow(clippy::ref_option)]
fn upstream_message(status: &Option<u16>, message: &str) -> String {
    status.map_or_else(
        || format!("Unexpected API response: {message}"),
        |status| format!("API request failed with status {status}: {message}"),
    )
}

impl TranslationError {
    pub(crate) fn missing_credential(env_var: &str) -> Self {
        Self::Configuration {
            message: "No API key configured".to_string(),
            hint: format!(
                "Set the {env_var} environment variable:\n  \
                 export {env_var}=\"your-api-key\"\n\n\
                 Or run 'gtl configure' to set api_key_env / api_key in the config file"
            ),
        }
    }

    /// Process exit code for this failure class.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::InvalidInput(_) => exitcode::DATAERR,
            Self::Configuration { .. } => exitcode::CONFIG,
            Self::Network(_) => exitcode::UNAVAILABLE,
            Self::Upstream { .. } => exitcode::PROTOCOL,
        }
    }
}

/// Failure of the transport itself, before any status code was seen.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("failed to connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for TranslationError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.to_string())
    }
}
