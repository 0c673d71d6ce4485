//! Gemini `generateContent` API types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the Generative Language API. They are NOT the
//! provider-agnostic LLM types from clara-types.

use serde::{Deserialize, Serialize};

use clara_types::llm::{GenerationRequest, MessageRole};

/// Request body for `models/{model}:streamGenerateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub system_instruction: GeminiSystemInstruction,
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    /// Build the wire request from a provider-agnostic generation request.
    ///
    /// Assistant turns map to the "model" role on the wire.
    pub fn from_generation_request(request: &GenerationRequest) -> Self {
        let contents = request
            .messages
            .iter()
            .map(|m| GeminiContent {
                role: match m.role {
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "model".to_string(),
                },
                parts: vec![GeminiPart {
                    text: m.content.clone(),
                }],
            })
            .collect();

        Self {
            system_instruction: GeminiSystemInstruction {
                parts: vec![GeminiPart {
                    text: request.config.system_instruction.clone(),
                }],
            },
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: request.config.temperature,
                max_output_tokens: request.config.max_output_tokens,
            },
        }
    }
}

/// System instruction block (no role on the wire).
#[derive(Debug, Clone, Serialize)]
pub struct GeminiSystemInstruction {
    pub parts: Vec<GeminiPart>,
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

/// A text part within a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

/// Sampling config on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// One SSE chunk of a streamed `GenerateContentResponse`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiChunk {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiChunk {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Finish reason of the first candidate, if the chunk carries one.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}

/// One candidate within a streamed chunk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: Option<GeminiCandidateContent>,
    pub finish_reason: Option<String>,
}

/// Content of a candidate (parts may be absent on final chunks).
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidateContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorBody {
    pub error: GeminiError,
}

/// An error from the Generative Language API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiError {
    pub code: u32,
    pub message: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clara_types::llm::{GenerationConfig, Message};

    fn request() -> GenerationRequest {
        GenerationRequest {
            config: GenerationConfig {
                model: "gemini-2.5-flash".to_string(),
                system_instruction: "Be warm.".to_string(),
                temperature: 0.7,
                max_output_tokens: 2048,
            },
            messages: vec![Message::user("Hello"), Message::assistant("Hi!")],
        }
    }

    #[test]
    fn test_request_serialization_uses_camel_case() {
        let wire = GeminiRequest::from_generation_request(&request());
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be warm.");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_assistant_turns_map_to_model_role() {
        let wire = GeminiRequest::from_generation_request(&request());
        assert_eq!(wire.contents[1].role, "model");
        assert_eq!(wire.contents[1].parts[0].text, "Hi!");
    }

    #[test]
    fn test_chunk_text_extraction() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Hel"}, {"text": "lo"}], "role": "model"}
            }]
        }"#;
        let chunk: GeminiChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.text().as_deref(), Some("Hello"));
        assert!(chunk.finish_reason().is_none());
    }

    #[test]
    fn test_final_chunk_without_parts() {
        let json = r#"{
            "candidates": [{"content": {"parts": []}, "finishReason": "STOP"}]
        }"#;
        let chunk: GeminiChunk = serde_json::from_str(json).unwrap();
        assert!(chunk.text().is_none());
        assert_eq!(chunk.finish_reason(), Some("STOP"));
    }

    #[test]
    fn test_empty_chunk() {
        let chunk: GeminiChunk = serde_json::from_str("{}").unwrap();
        assert!(chunk.text().is_none());
        assert!(chunk.finish_reason().is_none());
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{
            "error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}
        }"#;
        let body: GeminiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code, 429);
        assert_eq!(body.error.status, "RESOURCE_EXHAUSTED");
    }
}
