//! Prompt template service

use super::types::AssistantMessage;
use super::TongYiService;
use crate::dashscope::{ChatMessage, DashScopeClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

const JOKE_TEMPLATE: &str = "Tell me a {adjective} joke about {topic}";

/// Completion from a rendered prompt template
pub struct PromptTemplateService {
    client: Arc<DashScopeClient>,
}

impl PromptTemplateService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TongYiService for PromptTemplateService {
    fn name(&self) -> &'static str {
        "prompt_template"
    }

    async fn gen_prompt_templates(
        &self,
        adjective: &str,
        topic: &str,
    ) -> Result<AssistantMessage> {
        let prompt = render(JOKE_TEMPLATE, &[("adjective", adjective), ("topic", topic)]);
        let content = self.client.generate(vec![ChatMessage::user(prompt)]).await?;
        Ok(AssistantMessage::new(content))
    }
}

/// Substitute `{name}` placeholders in a template
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in values {
        rendered = rendered.replace(&format!("{{{}}}", name), value);
    }
    rendered
}
