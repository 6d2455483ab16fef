//! Text embedding service

use super::TongYiService;
use crate::dashscope::DashScopeClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Embedding vectors for input text
pub struct TextEmbeddingService {
    client: Arc<DashScopeClient>,
}

impl TextEmbeddingService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TongYiService for TextEmbeddingService {
    fn name(&self) -> &'static str {
        "text_embedding"
    }

    async fn text_embedding(&self, text: &str) -> Result<Vec<f64>> {
        self.client.embed(text).await
    }
}
