mod client;
mod error;
mod gemini;
mod language;
mod prompt;
mod transport;

pub use client::{TranslationClient, TranslationRequest};
pub use error::{TranslationError, TransportError};
pub use gemini::extract_translation;
pub use language::{LANGUAGE_NAMES, print_languages, resolve_language};
pub use prompt::{PROMPT_TEMPLATE, build_prompt};
pub use transport::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GenerationTransport, HttpTransport,
    RawResponse,
};
