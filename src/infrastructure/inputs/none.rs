#[cfg(test)]
#[path = "none_test.rs"]
mod tests;

use async_trait::async_trait;

use crate::domain::models::AnalysisError;
use crate::domain::models::CaptureDevice;
use crate::domain::models::CaptureName;
use crate::domain::models::CaptureStream;
use crate::domain::models::SpeechName;
use crate::domain::models::SpeechRecognizer;

/// Placeholder for environments with no microphone integration. Acquiring
/// reports the missing capability instead of crashing.
#[derive(Default)]
pub struct NoneCapture {}

impl CaptureDevice for NoneCapture {
    fn name(&self) -> CaptureName {
        return CaptureName::None;
    }

    fn acquire(&self) -> Result<Box<dyn CaptureStream>, AnalysisError> {
        return Err(AnalysisError::UnsupportedEnvironment(
            "Audio capture".to_string(),
        ));
    }
}

/// Placeholder for environments with no speech-recognition integration.
#[derive(Default)]
pub struct NoneSpeech {}

#[async_trait]
impl SpeechRecognizer for NoneSpeech {
    fn name(&self) -> SpeechName {
        return SpeechName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn recognize_once(&self) -> Result<String, AnalysisError> {
        return Err(AnalysisError::UnsupportedEnvironment(
            "Speech recognition".to_string(),
        ));
    }
}
