//! Text generation (single-shot and SSE streaming)

use super::DashScopeClient;
use crate::utils::error::{Result, TongYiError};
use futures::StreamExt;
use serde::{Deserialize, Serialize};

/// Path for the text generation API
pub const GENERATION_PATH: &str = "/api/v1/services/aigc/text-generation/generation";

/// A single chat message sent to or received from the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Build a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    input: GenerationInput,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationInput {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    result_format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    incremental_output: Option<bool>,
}

/// Response body of the generation API
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub output: GenerationOutput,
}

#[derive(Debug, Deserialize)]
pub struct GenerationOutput {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<GenerationChoice>>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationChoice {
    pub message: ChatMessage,
}

impl GenerationResponse {
    /// Extract the generated text, whichever result format was returned
    pub fn into_text(self) -> Option<String> {
        if let Some(choices) = self.output.choices {
            if let Some(choice) = choices.into_iter().next() {
                return Some(choice.message.content);
            }
        }
        self.output.text
    }
}

impl DashScopeClient {
    /// Run a chat completion and return the generated text
    pub async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request = GenerationRequest {
            model: &self.config().chat_model,
            input: GenerationInput { messages },
            parameters: GenerationParameters {
                result_format: "message",
                incremental_output: None,
            },
        };

        let response: GenerationResponse = self.post_json(GENERATION_PATH, &request, &[]).await?;
        response
            .into_text()
            .ok_or_else(|| TongYiError::provider("generation response contained no text"))
    }

    /// Run a chat completion with SSE streaming and collect the incremental
    /// chunks in arrival order
    pub async fn generate_stream(&self, messages: Vec<ChatMessage>) -> Result<Vec<String>> {
        let request = GenerationRequest {
            model: &self.config().chat_model,
            input: GenerationInput { messages },
            parameters: GenerationParameters {
                result_format: "message",
                incremental_output: Some(true),
            },
        };

        let response = self
            .post_raw(
                GENERATION_PATH,
                &request,
                &[
                    ("X-DashScope-SSE", "enable"),
                    ("Accept", "text/event-stream"),
                ],
            )
            .await?;

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut chunks = Vec::new();

        while let Some(item) = stream.next().await {
            let bytes = item?;
            buffer.push_str(&String::from_utf8_lossy(&bytes));

            while let Some(newline) = buffer.find('\n') {
                let line = buffer[..newline].trim_end_matches('\r').to_string();
                buffer.drain(..=newline);
                if let Some(text) = parse_sse_line(&line)? {
                    if !text.is_empty() {
                        chunks.push(text);
                    }
                }
            }
        }

        // Trailing data without a final newline
        if let Some(text) = parse_sse_line(buffer.trim_end())? {
            if !text.is_empty() {
                chunks.push(text);
            }
        }

        Ok(chunks)
    }
}

/// Extract the chunk text from a single SSE line, ignoring non-data lines
fn parse_sse_line(line: &str) -> Result<Option<String>> {
    let Some(data) = line.strip_prefix("data:") else {
        return Ok(None);
    };
    let payload = data.trim();
    if payload.is_empty() {
        return Ok(None);
    }

    let response: GenerationResponse = serde_json::from_str(payload)?;
    Ok(response.into_text())
}
