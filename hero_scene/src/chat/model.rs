//! Wire types for the chat endpoint and reply resolution.

use serde::{Deserialize, Serialize};

/// Shown when the request itself fails (connect, timeout, transport).
pub const NETWORK_ERROR_REPLY: &str = "Network error. Please try again.";
/// Shown when the endpoint answers with a body that is not valid JSON.
pub const INVALID_RESPONSE_REPLY: &str = "Invalid response.";
/// Shown when the endpoint answers with JSON carrying neither field.
pub const EMPTY_RESPONSE_REPLY: &str = "No response.";

/// Request body sent to the chat endpoint.
#[derive(Serialize, Clone, Debug)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body from the chat endpoint. The backend sends either a reply
/// or an error; both absent is treated as an empty response.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatResponse {
    /// Collapses the response into the text shown in the chat log: the
    /// reply, else the server-reported error, else a fixed fallback.
    pub fn into_display_text(self) -> String {
        self.reply
            .or(self.error)
            .unwrap_or_else(|| EMPTY_RESPONSE_REPLY.to_string())
    }
}
