//! Simple completion service (single-shot and streaming)

use super::TongYiService;
use crate::dashscope::{ChatMessage, DashScopeClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// General completion backed by the chat model
pub struct SimpleService {
    client: Arc<DashScopeClient>,
}

impl SimpleService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TongYiService for SimpleService {
    fn name(&self) -> &'static str {
        "simple"
    }

    async fn completion(&self, message: &str) -> Result<String> {
        self.client.generate(vec![ChatMessage::user(message)]).await
    }

    async fn stream_completion(&self, message: &str) -> Result<BTreeMap<String, String>> {
        let chunks = self
            .client
            .generate_stream(vec![ChatMessage::user(message)])
            .await?;

        // Zero-padded keys keep JSON output in arrival order
        Ok(chunks
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| (format!("{:03}", i), chunk))
            .collect())
    }
}
