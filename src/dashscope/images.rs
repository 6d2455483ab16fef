//! Image synthesis
//!
//! Image generation is an asynchronous vendor task: submit, then poll.

use super::{DashScopeClient, TaskSubmit};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Path for the image synthesis API
pub const IMAGE_SYNTHESIS_PATH: &str = "/api/v1/services/aigc/text2image/image-synthesis";

#[derive(Debug, Serialize)]
struct ImageSynthesisRequest<'a> {
    model: &'a str,
    input: ImageSynthesisInput<'a>,
    parameters: ImageSynthesisParameters,
}

#[derive(Debug, Serialize)]
struct ImageSynthesisInput<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct ImageSynthesisParameters {
    n: u8,
}

/// Task payload returned once image synthesis succeeds
#[derive(Debug, Deserialize)]
struct ImageTaskResult {
    results: Vec<ImageResult>,
}

#[derive(Debug, Deserialize)]
struct ImageResult {
    url: String,
}

impl DashScopeClient {
    /// Generate images for a prompt and return their URLs
    pub async fn text_to_image(&self, prompt: &str) -> Result<Vec<String>> {
        let request = ImageSynthesisRequest {
            model: &self.config().image_model,
            input: ImageSynthesisInput { prompt },
            parameters: ImageSynthesisParameters { n: 1 },
        };

        let submit: TaskSubmit = self
            .post_json(
                IMAGE_SYNTHESIS_PATH,
                &request,
                &[("X-DashScope-Async", "enable")],
            )
            .await?;

        let result: ImageTaskResult = self
            .wait_for_task(&submit.output.task_id, "image synthesis")
            .await?;
        Ok(result.results.into_iter().map(|r| r.url).collect())
    }
}
