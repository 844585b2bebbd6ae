use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::AnalysisError;
use super::CoughAssessment;
use super::LabelScores;
use super::MediaPayload;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AudioBackendName {
    Http,
    Mock,
}

impl AudioBackendName {
    pub fn parse(text: String) -> Option<AudioBackendName> {
        return AudioBackendName::iter().find(|e| return e.to_string() == text);
    }
}

/// Prompt sent to the conversational backend: the fixed instructional
/// template wrapped around the user's raw symptom text.
pub struct SymptomPrompt {
    pub text: String,
}

impl SymptomPrompt {
    pub fn new(symptoms: &str) -> SymptomPrompt {
        let text = format!(
            r#"You are an AI health assistant built for rural and semi-urban users in India.
A user has entered the following symptoms: "{symptoms}".
Provide clear and non-alarming advice in Hinglish:
- Possible Diseases
- First-Aid Suggestions
- Prevention Tips
- Doctor Advice
Keep it short, friendly and easy to understand."#
        );

        return SymptomPrompt { text };
    }
}

#[async_trait]
pub trait ImageClassifier {
    /// Used at startup to verify the classifier endpoint is reachable.
    async fn health_check(&self) -> Result<()>;

    /// Submits encoded image bytes and returns the per-condition confidence
    /// scores in the order the service listed them.
    async fn classify(&self, image: &MediaPayload) -> Result<LabelScores, AnalysisError>;
}

#[async_trait]
pub trait AudioClassifier {
    fn name(&self) -> AudioBackendName;

    async fn health_check(&self) -> Result<()>;

    /// Submits encoded audio bytes and returns the completed assessment.
    async fn analyze(&self, audio: &MediaPayload) -> Result<CoughAssessment, AnalysisError>;
}

#[async_trait]
pub trait Assistant {
    async fn health_check(&self) -> Result<()>;

    /// Sends one prompt and returns the assistant's free-form reply.
    async fn advise(&self, prompt: SymptomPrompt) -> Result<String, AnalysisError>;
}

pub type ImageClassifierBox = Box<dyn ImageClassifier + Send + Sync>;
pub type AudioClassifierBox = Box<dyn AudioClassifier + Send + Sync>;
pub type AssistantBox = Box<dyn Assistant + Send + Sync>;
