//! Wire format of the Gemini `generateContent` endpoint.
//!
//! Only the fields the client reads are modelled; everything else in the
//! response is ignored by serde.

use serde::{Deserialize, Serialize};

use super::error::TranslationError;

/// Longest slice of a raw error body echoed back to the user.
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single user turn carrying the prompt.
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}

/// Turns a raw HTTP status and body into the translated text.
///
/// # Errors
///
/// Returns [`TranslationError::Upstream`] for any non-success status, a body
/// that is not a `generateContent` response, or a response without text.
pub fn extract_translation(status: u16, body: &str) -> Result<String, TranslationError> {
    if !(200..300).contains(&status) {
        return Err(TranslationError::Upstream {
            status: Some(status),
            message: error_message(body),
        });
    }

    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| TranslationError::Upstream {
            status: None,
            message: format!("malformed response body ({e})"),
        })?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let message = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map_or_else(
                || "response contained no candidates".to_string(),
                |reason| format!("prompt was blocked ({reason})"),
            );
        return Err(TranslationError::Upstream {
            status: None,
            message,
        });
    };

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        let message = candidate.finish_reason.map_or_else(
            || "first candidate contained no text".to_string(),
            |reason| format!("first candidate contained no text (finish reason: {reason})"),
        );
        return Err(TranslationError::Upstream {
            status: None,
            message,
        });
    }

    Ok(text)
}

fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return match envelope.error.status {
            Some(status) => format!("{} ({status})", envelope.error.message),
            None => envelope.error.message,
        };
    }

    let body = body.trim();
    if body.is_empty() {
        return "(empty body)".to_string();
    }
    if body.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return format!("{truncated}...");
    }
    body.to_string()
}
