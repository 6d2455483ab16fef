//! Role-play service

use super::types::AssistantMessage;
use super::TongYiService;
use crate::dashscope::{ChatMessage, DashScopeClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Role-played completion: the persona is set through a system message
pub struct RolesService {
    client: Arc<DashScopeClient>,
}

impl RolesService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }

    fn system_prompt(name: &str, voice: &str) -> String {
        format!(
            "You are a helpful AI assistant. Your name is {} and you should \
             answer the user's request in the voice of a {}.",
            name, voice
        )
    }
}

#[async_trait]
impl TongYiService for RolesService {
    fn name(&self) -> &'static str {
        "roles"
    }

    async fn gen_role(&self, message: &str, name: &str, voice: &str) -> Result<AssistantMessage> {
        let messages = vec![
            ChatMessage::system(Self::system_prompt(name, voice)),
            ChatMessage::user(message),
        ];
        let content = self.client.generate(messages).await?;
        Ok(AssistantMessage::new(content)
            .with_metadata("name", name)
            .with_metadata("voice", voice))
    }
}
