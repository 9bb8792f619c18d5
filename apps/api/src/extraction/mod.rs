//! Structured résumé extraction — pluggable, trait-based.
//!
//! Default: `GeminiExtractor`, which sends the file inline to the model.
//! `AppState` holds an `Arc<dyn ResumeExtractor>`, constructed at start-up.

pub mod prompts;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extraction::prompts::{RESUME_EXTRACT_PROMPT, RESUME_EXTRACT_SYSTEM};
use crate::llm_client::prompts::NO_INVENTION_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError, Part};
use crate::upload::ResumeDocument;

/// Turns an uploaded résumé into an untrusted JSON value tree.
///
/// Implementations do not validate the shape of what they return; scoring
/// tolerates any JSON value.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, document: &ResumeDocument) -> Result<Value, AppError>;
}

/// Extractor backed by the Gemini model.
pub struct GeminiExtractor(pub LlmClient);

#[async_trait]
impl ResumeExtractor for GeminiExtractor {
    async fn extract(&self, document: &ResumeDocument) -> Result<Value, AppError> {
        let parts = build_parts(document);
        debug!(
            "Sending {} bytes ({}) for extraction",
            document.bytes.len(),
            document.mime_type
        );

        match self.0.call_json::<Value>(&parts, RESUME_EXTRACT_SYSTEM).await {
            Ok(value) => Ok(value),
            Err(LlmError::EmptyContent) => Err(AppError::NoResponse),
            Err(LlmError::Parse(e)) => {
                warn!("Extraction returned non-JSON text: {e}");
                Err(AppError::Llm(format!("Extraction output was not JSON: {e}")))
            }
            Err(e) => Err(AppError::Llm(format!("Resume extraction failed: {e}"))),
        }
    }
}

fn build_parts(document: &ResumeDocument) -> Vec<Part> {
    vec![
        Part::text(format!("{RESUME_EXTRACT_PROMPT}\n\n{NO_INVENTION_INSTRUCTION}")),
        Part::inline(
            document.mime_type.clone(),
            general_purpose::STANDARD.encode(&document.bytes),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_build_parts_inlines_file_with_its_mime_type() {
        let document = ResumeDocument {
            file_name: Some("cv.txt".into()),
            mime_type: "text/plain".into(),
            bytes: Bytes::from_static(b"hello"),
        };

        let parts = build_parts(&document);
        assert_eq!(parts.len(), 2);

        let prompt = parts[0].text.as_deref().unwrap();
        assert!(prompt.contains("recomendations"));
        assert!(prompt.contains("return null"));

        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "text/plain");
        assert_eq!(inline.data, "aGVsbG8=");
    }
}
