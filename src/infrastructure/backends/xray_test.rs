use test_utils::scores_fixture;
use test_utils::tied_scores_fixture;

use super::XrayClassifier;
use crate::domain::models::AnalysisError;
use crate::domain::models::ImageClassifier;
use crate::domain::models::MediaPayload;

impl XrayClassifier {
    fn with_url(url: String) -> XrayClassifier {
        return XrayClassifier {
            url,
            timeout: "200".to_string(),
        };
    }
}

fn image() -> MediaPayload {
    return MediaPayload {
        data: vec![137, 80, 78, 71],
        file_name: "xray.png".to_string(),
        mime: "image/png".to_string(),
    };
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(200).create();

    let backend = XrayClassifier::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_when_unreachable() {
    let backend = XrayClassifier::with_url("http://127.0.0.1:1".to_string());
    let res = backend.health_check().await;

    assert!(res.is_err());
}

#[tokio::test]
async fn it_returns_scores_in_service_order() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(scores_fixture())
        .create();

    let backend = XrayClassifier::with_url(server.url());
    let scores = backend.classify(&image()).await.unwrap();

    assert_eq!(
        scores,
        vec![
            ("TB".to_string(), 87.0),
            ("COVID".to_string(), 12.0),
            ("PNEUMONIA".to_string(), 30.0),
        ]
    );
    mock.assert();
}

#[tokio::test]
async fn it_keeps_tied_scores_in_service_order() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(tied_scores_fixture())
        .create();

    let backend = XrayClassifier::with_url(server.url());
    let scores = backend.classify(&image()).await.unwrap();

    assert_eq!(
        scores,
        vec![("TB".to_string(), 80.0), ("COVID".to_string(), 80.0)]
    );
}

#[tokio::test]
async fn it_surfaces_server_rejections() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/predict")
        .with_status(422)
        .with_body(r#"{"error": "No file selected"}"#)
        .create();

    let backend = XrayClassifier::with_url(server.url());
    let err = backend.classify(&image()).await.unwrap_err();

    match err {
        AnalysisError::BackendRejected { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "No file selected");
        }
        _ => panic!("expected a rejection, got {err:?}"),
    }
}

#[tokio::test]
async fn it_normalizes_network_failures() {
    let backend = XrayClassifier::with_url("http://127.0.0.1:1".to_string());
    let err = backend.classify(&image()).await.unwrap_err();

    assert!(matches!(err, AnalysisError::BackendUnreachable(_)));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn it_rejects_non_json_bodies() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();

    let backend = XrayClassifier::with_url(server.url());
    let err = backend.classify(&image()).await.unwrap_err();

    assert!(matches!(err, AnalysisError::BackendMalformed(_)));
}

#[tokio::test]
async fn it_rejects_non_numeric_scores() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/predict")
        .with_status(200)
        .with_body(r#"{"TB": "very high"}"#)
        .create();

    let backend = XrayClassifier::with_url(server.url());
    let err = backend.classify(&image()).await.unwrap_err();

    assert!(matches!(err, AnalysisError::BackendMalformed(_)));
}
