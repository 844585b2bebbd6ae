#[cfg(test)]
#[path = "xray_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalysisError;
use crate::domain::models::ImageClassifier;
use crate::domain::models::LabelScores;
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

/// Keeps the service's key order so ties resolve to the first entry it
/// returned.
fn scores_from_map(
    body: serde_json::Map<String, serde_json::Value>,
) -> Result<LabelScores, AnalysisError> {
    let mut scores: LabelScores = Vec::with_capacity(body.len());
    for (label, value) in body {
        match value.as_f64() {
            Some(score) => scores.push((label, score)),
            None => {
                return Err(AnalysisError::BackendMalformed(format!(
                    "score for {label} is not a number"
                )))
            }
        }
    }

    return Ok(scores);
}

pub struct XrayClassifier {
    url: String,
    timeout: String,
}

impl Default for XrayClassifier {
    fn default() -> XrayClassifier {
        return XrayClassifier {
            url: Config::get(ConfigKey::XrayUrl),
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl ImageClassifier for XrayClassifier {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        // Any HTTP response counts as reachable; the service only routes
        // POST /predict.
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "X-ray classifier is not running");
            bail!("X-ray classifier is not running");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn classify(&self, image: &MediaPayload) -> Result<LabelScores, AnalysisError> {
        let part = reqwest::multipart::Part::bytes(image.data.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let res = reqwest::Client::new()
            .post(format!("{url}/predict", url = self.url))
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            let err = rejection(res).await;
            tracing::error!(error = %err, "X-ray classify request was rejected");
            return Err(err);
        }

        let body = res
            .json::<serde_json::Map<String, serde_json::Value>>()
            .await?;
        tracing::debug!(scores = ?body, "X-ray classify response");

        return scores_from_map(body);
    }
}
