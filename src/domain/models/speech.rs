use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::AnalysisError;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SpeechName {
    None,
}

impl SpeechName {
    pub fn parse(text: String) -> Option<SpeechName> {
        return SpeechName::iter().find(|e| return e.to_string() == text);
    }
}

/// Single-shot speech recognition. `recognize_once` resolves with the
/// transcript of one utterance; it never listens continuously. An
/// unsupported environment is reported through the error taxonomy, not a
/// panic.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    fn name(&self) -> SpeechName;

    async fn recognize_once(&self) -> Result<String, AnalysisError>;
}

pub type SpeechRecognizerBox = Box<dyn SpeechRecognizer>;
