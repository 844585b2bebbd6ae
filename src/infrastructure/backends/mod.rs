pub mod assistant;
pub mod cough;
pub mod cough_mock;
pub mod xray;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::AssistantBox;
use crate::domain::models::AudioBackendName;
use crate::domain::models::AudioClassifierBox;
use crate::domain::models::ImageClassifierBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn image() -> ImageClassifierBox {
        return Box::<xray::XrayClassifier>::default();
    }

    pub fn audio(name: AudioBackendName) -> Result<AudioClassifierBox> {
        if name == AudioBackendName::Http {
            return Ok(Box::<cough::CoughClassifier>::default());
        }

        if name == AudioBackendName::Mock {
            return Ok(Box::<cough_mock::MockCoughClassifier>::default());
        }

        bail!(format!("No audio backend implemented for {name}"))
    }

    pub fn assistant() -> AssistantBox {
        return Box::<assistant::GeminiAssistant>::default();
    }
}
