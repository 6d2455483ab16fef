//! Structured output service
//!
//! Asks the model for a JSON document and parses it into [`ActorsFilms`].
//! Models often wrap JSON in code fences or prose, so extraction is
//! fence-tolerant. There is no re-ask on parse failure.

use super::types::ActorsFilms;
use super::TongYiService;
use crate::dashscope::{ChatMessage, DashScopeClient};
use crate::utils::error::{Result, TongYiError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const FORMAT_INSTRUCTIONS: &str = "Respond with a JSON object containing the fields \
\"actor\" (a string) and \"movies\" (an array of strings). \
Do not include any text outside the JSON object.";

/// Structured filmography generation
pub struct OutputParseService {
    client: Arc<DashScopeClient>,
}

impl OutputParseService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TongYiService for OutputParseService {
    fn name(&self) -> &'static str {
        "output_parse"
    }

    async fn gen_output_parse(&self, actor: &str) -> Result<ActorsFilms> {
        let prompt = format!(
            "Generate the filmography for the actor {}.\n{}",
            actor, FORMAT_INSTRUCTIONS
        );
        let raw = self.client.generate(vec![ChatMessage::user(prompt)]).await?;
        extract_json(&raw)
    }
}

/// Parse a JSON object out of model output, tolerating code fences and prose
fn extract_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    let candidate = match (start, end) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => {
            return Err(TongYiError::provider(format!(
                "model output contained no JSON object: {}",
                raw
            )));
        }
    };

    serde_json::from_str(candidate).map_err(|e| {
        TongYiError::provider(format!("failed to parse model output as JSON: {}", e))
    })
}
