use httpmock::prelude::*;
use logis_core::LogisError;
use logis_llm::{GoogleClient, Llm};
use secrecy::SecretString;
use serde_json::json;

fn client(server: &MockServer) -> GoogleClient {
    GoogleClient::new(
        SecretString::new("test-key".to_string()),
        "gemini-2.5-flash",
    )
    .with_base_url(server.url(""))
}

#[tokio::test]
async fn google_generate_sends_prompt_and_temperature() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent")
            .header("x-goog-api-key", "test-key")
            .json_body(json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [{"text": "Combien de chambres ?"}]
                    }
                ],
                "generationConfig": { "temperature": 0.2 }
            }));
        then.status(200).json_body(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Il y a "}, {"text": "20 chambres."}]
                    },
                    "finishReason": "STOP"
                }
            ]
        }));
    });

    let answer = client(&server).generate("Combien de chambres ?").await.unwrap();
    assert_eq!(answer, "Il y a 20 chambres.");
    mock.assert();
}

#[tokio::test]
async fn google_generate_surfaces_provider_error_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent");
        then.status(403).json_body(json!({
            "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
        }));
    });

    let err = client(&server).generate("hi").await.unwrap_err();
    assert!(matches!(err, LogisError::LlmProvider(message) if message == "API key not valid"));
}

#[tokio::test]
async fn google_generate_reports_raw_body_when_error_is_not_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent");
        then.status(429).body("quota exceeded");
    });

    let err = client(&server).generate("hi").await.unwrap_err();
    assert!(matches!(
        err,
        LogisError::LlmProvider(message)
            if message.contains("429") && message.contains("quota exceeded")
    ));
}

#[tokio::test]
async fn google_generate_rejects_empty_and_blocked_candidates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent");
        then.status(200).json_body(json!({ "candidates": [] }));
    });
    let err = client(&server).generate("hi").await.unwrap_err();
    assert!(err.to_string().contains("No candidates"));

    let blocked = MockServer::start();
    blocked.mock(|when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent");
        then.status(200).json_body(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }));
    });
    let err = client(&blocked).generate("hi").await.unwrap_err();
    assert!(err.to_string().contains("SAFETY"));
}

#[test]
fn google_client_reports_model_and_hides_key() {
    let client = GoogleClient::new(
        SecretString::new("super-secret".to_string()),
        "models/gemini-2.5-flash",
    )
    .with_temperature(0.5);

    assert_eq!(client.model(), "gemini-2.5-flash");
    assert_eq!(client.temperature(), 0.5);
    assert!(!format!("{client:?}").contains("super-secret"));
}

#[tokio::test]
async fn unreachable_provider_is_a_provider_error() {
    let client = GoogleClient::new(
        SecretString::new("test-key".to_string()),
        "gemini-2.5-flash",
    )
    .with_base_url("http://127.0.0.1:9");

    let err = client.generate("hi").await.unwrap_err();
    assert!(matches!(err, LogisError::LlmProvider(message) if !message.is_empty()));
}
