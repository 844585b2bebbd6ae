#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalysisError;
use crate::domain::models::Assistant;
use crate::domain::models::SymptomPrompt;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
struct Content {
    role: String,
    parts: Vec<ContentPart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
struct CompletionRequest {
    contents: Vec<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ApiError {
    #[serde(default)]
    error: ApiErrorBody,
}

/// Conversational backend over the hosted generative-language API. One
/// prompt in, one free-form reply out; conversation history lives in the
/// controller's log, not in the request.
pub struct GeminiAssistant {
    url: String,
    token: String,
    timeout: String,
}

impl Default for GeminiAssistant {
    fn default() -> GeminiAssistant {
        return GeminiAssistant {
            url: Config::get(ConfigKey::AssistantUrl),
            token: Config::get(ConfigKey::AssistantToken),
            timeout: Config::get(ConfigKey::BackendHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Assistant for GeminiAssistant {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Assistant URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Assistant API token is not defined");
        }

        let url = format!(
            "{url}/v1beta/models/{model}?key={key}",
            url = self.url,
            model = Config::get(ConfigKey::AssistantModel),
            key = self.token
        );

        let res = reqwest::Client::new()
            .get(&url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Assistant API is not reachable");
            bail!("Assistant API is not reachable");
        }

        let status = res.unwrap().status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "Assistant health check failed");
            bail!("Assistant health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn advise(&self, prompt: SymptomPrompt) -> Result<String, AnalysisError> {
        let req = CompletionRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![ContentPart { text: prompt.text }],
            }],
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/models/{model}:generateContent?key={key}",
                url = self.url,
                model = Config::get(ConfigKey::AssistantModel),
                key = self.token,
            ))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let message = match res.json::<ApiError>().await {
                Ok(body) => body.error.message,
                Err(_) => "".to_string(),
            };
            tracing::error!(status = status, "Assistant request was rejected");
            return Err(AnalysisError::BackendRejected { status, message });
        }

        let body = res.json::<GenerateContentResponse>().await?;
        let reply = match body.candidates.first() {
            Some(candidate) => candidate
                .content
                .parts
                .iter()
                .map(|part| {
                    return part.text.as_str();
                })
                .collect::<Vec<&str>>()
                .join(""),
            None => "".to_string(),
        };

        if reply.trim().is_empty() {
            return Err(AnalysisError::BackendMalformed(
                "response contained no candidates".to_string(),
            ));
        }

        return Ok(reply);
    }
}
