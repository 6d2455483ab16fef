//! Audio endpoints

mod speech;
mod transcription;

pub use speech::audio_speech;
pub use transcription::audio_transcription;
