#[cfg(test)]
#[path = "cough_mock_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use tokio::time::sleep;

use crate::domain::models::AnalysisError;
use crate::domain::models::AudioBackendName;
use crate::domain::models::AudioClassifier;
use crate::domain::models::CoughAssessment;
use crate::domain::models::MediaPayload;

fn canned() -> Vec<CoughAssessment> {
    return vec![
        CoughAssessment {
            label: "Productive Cough (Pneumonia)".to_string(),
            confidence: 87.0,
            characteristics: vec![
                "Wet/Productive".to_string(),
                "Low frequency".to_string(),
                "Extended duration".to_string(),
            ],
            recommendation:
                "Consult a healthcare provider for possible bacterial infection treatment."
                    .to_string(),
        },
        CoughAssessment {
            label: "Normal Cough".to_string(),
            confidence: 92.0,
            characteristics: vec![
                "Dry".to_string(),
                "Normal frequency".to_string(),
                "Short duration".to_string(),
            ],
            recommendation: "No immediate concern. Monitor symptoms and stay hydrated."
                .to_string(),
        },
        CoughAssessment {
            label: "Tuberculosis Cough".to_string(),
            confidence: 78.0,
            characteristics: vec![
                "Persistent".to_string(),
                "Blood-tinged".to_string(),
                "Night sweats associated".to_string(),
            ],
            recommendation: "Urgent medical consultation required for TB testing and treatment."
                .to_string(),
        },
    ];
}

/// Stand-in for the audio classifier service while it is being built.
/// Same trait, same assessment shape, a fixed delay, and a canned result
/// picked at random unless scripted.
pub struct MockCoughClassifier {
    delay: Duration,
    choice: Option<usize>,
}

impl Default for MockCoughClassifier {
    fn default() -> MockCoughClassifier {
        return MockCoughClassifier {
            delay: Duration::from_millis(1500),
            choice: None,
        };
    }
}

impl MockCoughClassifier {
    /// Deterministic variant: no delay, always the given canned result.
    pub fn scripted(choice: usize) -> MockCoughClassifier {
        return MockCoughClassifier {
            delay: Duration::ZERO,
            choice: Some(choice),
        };
    }
}

#[async_trait]
impl AudioClassifier for MockCoughClassifier {
    fn name(&self) -> AudioBackendName {
        return AudioBackendName::Mock;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn analyze(&self, audio: &MediaPayload) -> Result<CoughAssessment, AnalysisError> {
        if audio.data.is_empty() {
            return Err(AnalysisError::InputMissing);
        }

        sleep(self.delay).await;

        let options = canned();
        let idx = match self.choice {
            Some(choice) => choice % options.len(),
            None => rand::thread_rng().gen_range(0..options.len()),
        };

        return Ok(options[idx].clone());
    }
}
