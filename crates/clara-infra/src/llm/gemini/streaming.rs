//! SSE stream creation for the Gemini `streamGenerateContent` endpoint.
//!
//! With `?alt=sse` the API delivers one `data:` event per
//! `GenerateContentResponse` chunk. Each chunk carries zero or more text
//! parts; the final chunk carries a `finishReason`. There is no explicit
//! terminator event -- the stream simply closes, so `Done` is emitted when
//! the SSE connection ends cleanly.

use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use secrecy::{ExposeSecret, SecretString};

use clara_core::llm::EventStream;
use clara_types::llm::{LlmError, StreamEvent};

use super::types::{GeminiChunk, GeminiErrorBody, GeminiRequest};

/// Open a streaming SSE connection and map chunks to [`StreamEvent`]s.
pub fn create_gemini_stream(
    client: reqwest::Client,
    url: String,
    body: GeminiRequest,
    api_key: SecretString,
) -> EventStream {
    Box::pin(async_stream::try_stream! {
        let response = client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            Err(status_error(status.as_u16(), &error_body))?;
            return;
        }

        let mut events = response.bytes_stream().eventsource();
        while let Some(event) = events.next().await {
            let event = event.map_err(|e| LlmError::Stream(e.to_string()))?;
            let chunk: GeminiChunk = serde_json::from_str(&event.data)
                .map_err(|e| LlmError::Deserialization(format!("failed to parse chunk: {e}")))?;

            if let Some(text) = chunk.text() {
                yield StreamEvent::TextDelta { text };
            }
            if let Some(reason) = chunk.finish_reason() {
                if reason != "STOP" {
                    tracing::warn!(finish_reason = reason, "reply ended early");
                }
            }
        }

        yield StreamEvent::Done;
    })
}

/// Map an HTTP error status to an [`LlmError`].
///
/// The API reports an invalid key as 400 INVALID_ARGUMENT, not 401, so
/// both are treated as authentication failures when the body says so.
pub(super) fn status_error(status: u16, body: &str) -> LlmError {
    let message = serde_json::from_str::<GeminiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        401 | 403 => LlmError::AuthenticationFailed,
        400 if message.to_lowercase().contains("api key") => LlmError::AuthenticationFailed,
        400 => LlmError::InvalidRequest(message),
        429 => LlmError::RateLimited,
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_auth() {
        assert!(matches!(
            status_error(403, "{}"),
            LlmError::AuthenticationFailed
        ));
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            status_error(400, body),
            LlmError::AuthenticationFailed
        ));
    }

    #[test]
    fn test_status_error_invalid_request() {
        let body = r#"{"error":{"code":400,"message":"contents must not be empty","status":"INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            status_error(400, body),
            LlmError::InvalidRequest(msg) if msg.contains("contents")
        ));
    }

    #[test]
    fn test_status_error_rate_limited() {
        assert!(matches!(status_error(429, ""), LlmError::RateLimited));
    }

    #[test]
    fn test_status_error_other_uses_raw_body_when_unparseable() {
        let err = status_error(503, "upstream unavailable");
        assert!(matches!(
            err,
            LlmError::Provider { message } if message.contains("503") && message.contains("upstream unavailable")
        ));
    }
}
