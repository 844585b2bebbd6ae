use test_utils::generate_content_fixture;

use super::GeminiAssistant;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalysisError;
use crate::domain::models::Assistant;
use crate::domain::models::SymptomPrompt;

impl GeminiAssistant {
    fn with_url(url: String) -> GeminiAssistant {
        Config::set(ConfigKey::AssistantModel, "gemini-2.5-pro");

        return GeminiAssistant {
            url,
            token: "abc123".to_string(),
            timeout: "200".to_string(),
        };
    }
}

#[tokio::test]
async fn it_fails_health_checks_without_a_token() {
    let backend = GeminiAssistant {
        url: "http://127.0.0.1:1".to_string(),
        token: "".to_string(),
        timeout: "200".to_string(),
    };

    assert!(backend.health_check().await.is_err());
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1beta/models/gemini-2.5-pro?key=abc123")
        .with_status(200)
        .create();

    let backend = GeminiAssistant::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_joins_reply_parts() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-pro:generateContent?key=abc123",
        )
        .with_status(200)
        .with_body(generate_content_fixture())
        .create();

    let backend = GeminiAssistant::with_url(server.url());
    let reply = backend
        .advise(SymptomPrompt::new("fever and body ache"))
        .await
        .unwrap();

    assert!(reply.starts_with("**Possible Diseases**"));
    assert!(reply.ends_with("Rest and hydrate."));
    mock.assert();
}

#[tokio::test]
async fn it_surfaces_api_rejections() {
    let mut server = mockito::Server::new();
    server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-pro:generateContent?key=abc123",
        )
        .with_status(429)
        .with_body(r#"{"error": {"message": "Resource has been exhausted"}}"#)
        .create();

    let backend = GeminiAssistant::with_url(server.url());
    let err = backend
        .advise(SymptomPrompt::new("fever"))
        .await
        .unwrap_err();

    match err {
        AnalysisError::BackendRejected { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Resource has been exhausted");
        }
        _ => panic!("expected a rejection, got {err:?}"),
    }
}

#[tokio::test]
async fn it_rejects_empty_candidate_lists() {
    let mut server = mockito::Server::new();
    server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-pro:generateContent?key=abc123",
        )
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create();

    let backend = GeminiAssistant::with_url(server.url());
    let err = backend
        .advise(SymptomPrompt::new("fever"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::BackendMalformed(_)));
}

#[tokio::test]
async fn it_normalizes_network_failures() {
    let backend = GeminiAssistant::with_url("http://127.0.0.1:1".to_string());
    let err = backend
        .advise(SymptomPrompt::new("fever"))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::BackendUnreachable(_)));
}
