//! "Stuff" completion service
//!
//! Optionally stuffs a reference document into the prompt so the model can
//! answer questions about events past its training cut-off. The bundled
//! document covers the curling events of the 2022 Winter Olympics.

use super::types::Completion;
use super::TongYiService;
use crate::dashscope::{ChatMessage, DashScopeClient};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

const CURLING_CONTEXT: &str = "Curling at the 2022 Winter Olympics was held at the Beijing \
National Aquatics Centre from 2 to 20 February 2022. In the mixed doubles tournament, the \
Italian pair Stefania Constantini and Amos Mosaner won the gold medal, defeating Norway in \
the final. Norway's Kristin Skaslien and Magnus Nedregotten took silver, and Sweden's \
Almida de Val and Oskar Eriksson took bronze.";

/// Completion with optional context stuffing
pub struct StuffService {
    client: Arc<DashScopeClient>,
}

impl StuffService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }

    fn build_prompt(message: &str, stuffit: bool) -> String {
        if stuffit {
            format!(
                "Answer the question using only the context below. If the answer \
                 is not in the context, say that you don't know.\n\nContext:\n{}\n\nQuestion: {}",
                CURLING_CONTEXT, message
            )
        } else {
            message.to_string()
        }
    }
}

#[async_trait]
impl TongYiService for StuffService {
    fn name(&self) -> &'static str {
        "stuff"
    }

    async fn stuff_completion(&self, message: &str, stuffit: bool) -> Result<Completion> {
        let prompt = Self::build_prompt(message, stuffit);
        let text = self.client.generate(vec![ChatMessage::user(prompt)]).await?;
        Ok(Completion { text })
    }
}
