//! AI capability endpoints
//!
//! One GET route per TongYi capability, all under the `/ai` scope. Every
//! handler is a thin delegation to the capability service resolved at
//! startup; only the transcription route validates its input.

mod audio;
mod completion;
mod embeddings;
mod images;
mod output;
mod prompt;
mod roles;
mod stuff;

pub use audio::{audio_speech, audio_transcription};
pub use completion::{completion, stream_completion};
pub use embeddings::text_embedding;
pub use images::gen_img;
pub use output::gen_output_parse;
pub use prompt::gen_prompt_templates;
pub use roles::gen_role;
pub use stuff::stuff_completion;

use actix_web::web;

/// Fall back to the documented default when a query parameter was sent as an
/// empty string, the same as when it is omitted entirely.
pub(crate) fn param_or_default(value: String, default: fn() -> String) -> String {
    if value.is_empty() {
        default()
    } else {
        value
    }
}

/// Configure the AI capability routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ai")
            .route("/example", web::get().to(completion))
            .route("/stream", web::get().to(stream_completion))
            .route("/output", web::get().to(gen_output_parse))
            .route("/prompt-tmpl", web::get().to(gen_prompt_templates))
            .route("/roles", web::get().to(gen_role))
            .route("/stuff", web::get().to(stuff_completion))
            .route("/img", web::get().to(gen_img))
            .route("/audio/speech", web::get().to(audio_speech))
            .route("/audio/transcription", web::get().to(audio_transcription))
            .route("/textEmbedding", web::get().to(text_embedding)),
    );
}
