use tracing::{debug, info};

use super::error::TranslationError;
use super::gemini::extract_translation;
use super::prompt::build_prompt;
use super::transport::GenerationTransport;

/// A validated, single-use translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_text: String,
    target_language: String,
}

impl TranslationRequest {
    /// Builds a request, rejecting blank text or a blank language.
    ///
    /// Surrounding whitespace of the language is dropped; the source text is
    /// kept as given.
    pub fn new(source_text: &str, target_language: &str) -> Result<Self, TranslationError> {
        if source_text.trim().is_empty() {
            return Err(TranslationError::InvalidInput(
                "Please enter some text to translate.".to_string(),
            ));
        }

        let target_language = target_language.trim();
        if target_language.is_empty() {
            return Err(TranslationError::InvalidInput(
                "Please specify a target language.".to_string(),
            ));
        }

        Ok(Self {
            source_text: source_text.to_string(),
            target_language: target_language.to_string(),
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn prompt(&self) -> String {
        build_prompt(&self.target_language, &self.source_text)
    }
}

/// Translates text by asking a generation service to do it.
///
/// The credential is handed in at construction; the client never reads the
/// environment itself.
pub struct TranslationClient<T> {
    transport: T,
    api_key: Option<String>,
    api_key_env: String,
}

impl<T: GenerationTransport> TranslationClient<T> {
    /// `api_key_env` only feeds the remediation hint when no key is present.
    pub fn new(transport: T, api_key: Option<String>, api_key_env: impl Into<String>) -> Self {
        Self {
            transport,
            api_key,
            api_key_env: api_key_env.into(),
        }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Translates `source_text` into `target_language`.
    ///
    /// Input is checked first, then the credential; neither failure reaches
    /// the transport.
    pub async fn translate(
        &self,
        source_text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let request = TranslationRequest::new(source_text, target_language)?;
        self.send(&request).await
    }

    pub async fn send(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TranslationError::missing_credential(&self.api_key_env))?;

        info!(
            target_language = request.target_language(),
            chars = request.source_text().chars().count(),
            "translating"
        );

        let response = self
            .transport
            .send_generation_request(api_key, &request.prompt())
            .await?;

        debug!(status = response.status, "extracting translation");
        extract_translation(response.status, &response.body)
    }
}
