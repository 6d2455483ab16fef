//! Text embedding

use super::DashScopeClient;
use crate::utils::error::{Result, TongYiError};
use serde::{Deserialize, Serialize};

/// Path for the text embedding API
pub const TEXT_EMBEDDING_PATH: &str = "/api/v1/services/embeddings/text-embedding/text-embedding";

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: EmbeddingInput<'a>,
}

#[derive(Debug, Serialize)]
struct EmbeddingInput<'a> {
    texts: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    output: EmbeddingOutput,
}

#[derive(Debug, Deserialize)]
struct EmbeddingOutput {
    embeddings: Vec<Embedding>,
}

#[derive(Debug, Deserialize)]
struct Embedding {
    embedding: Vec<f64>,
}

impl DashScopeClient {
    /// Embed a single text and return its vector
    pub async fn embed(&self, text: &str) -> Result<Vec<f64>> {
        let request = EmbeddingRequest {
            model: &self.config().embedding_model,
            input: EmbeddingInput { texts: vec![text] },
        };

        let response: EmbeddingResponse =
            self.post_json(TEXT_EMBEDDING_PATH, &request, &[]).await?;
        response
            .output
            .embeddings
            .into_iter()
            .next()
            .map(|e| e.embedding)
            .ok_or_else(|| TongYiError::provider("embedding response contained no vector"))
    }
}
