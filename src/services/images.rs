//! Image generation service

use super::types::{GeneratedImage, ImageResponse};
use super::TongYiService;
use crate::dashscope::DashScopeClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Image generation backed by the image synthesis model
pub struct ImagesService {
    client: Arc<DashScopeClient>,
}

impl ImagesService {
    pub fn new(client: Arc<DashScopeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TongYiService for ImagesService {
    fn name(&self) -> &'static str {
        "images"
    }

    async fn gen_img(&self, prompt: &str) -> Result<ImageResponse> {
        let urls = self.client.text_to_image(prompt).await?;
        Ok(ImageResponse {
            images: urls.into_iter().map(|url| GeneratedImage { url }).collect(),
        })
    }
}
