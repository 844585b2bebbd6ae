#[cfg(test)]
#[path = "cough_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalysisError;
use crate::domain::models::AudioBackendName;
use crate::domain::models::AudioClassifier;
use crate::domain::models::CoughAssessment;
use crate::domain::models::MediaPayload;

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

async fn rejection(res: reqwest::Response) -> AnalysisError {
    let status = res.status().as_u16();
    let message = match res.json::<ErrorBody>().await {
        Ok(body) => body.error.unwrap_or_default(),
        Err(_) => "".to_string(),
    };

    return AnalysisError::BackendRejected { status, message };
}

/// HTTP cough classifier. Mirrors the X-ray service's contract: multipart
/// upload to `/predict`, JSON assessment back.
pub struct CoughClassifier {
    url: String,
    timeout: String,
}

impl Default for CoughClassifier {
    fn default() -> CoughClassifier {
        return CoughClassifier {
            url: Config::get(ConfigKey::CoughUrl),
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl AudioClassifier for CoughClassifier {
    fn name(&self) -> AudioBackendName {
        return AudioBackendName::Http;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Cough classifier is not running");
            bail!("Cough classifier is not running");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn analyze(&self, audio: &MediaPayload) -> Result<CoughAssessment, AnalysisError> {
        let part = reqwest::multipart::Part::bytes(audio.data.clone())
            .file_name(audio.file_name.clone())
            .mime_str(&audio.mime)?;
        let form = reqwest::multipart::Form::new().part("audio", part);

        let res = reqwest::Client::new()
            .post(format!("{url}/predict", url = self.url))
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            let err = rejection(res).await;
            tracing::error!(error = %err, "Cough analyze request was rejected");
            return Err(err);
        }

        let assessment = res.json::<CoughAssessment>().await?;
        tracing::debug!(label = assessment.label, "Cough analyze response");

        return Ok(assessment);
    }
}
