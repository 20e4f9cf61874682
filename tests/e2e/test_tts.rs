use crate::e2e::helpers;

use helpers::{TestContext, STUB_AUDIO};
use hyper::StatusCode;
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn it_should_synthesize_text_to_speech() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Hello world",
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("content-type").map(String::as_str),
        Some("audio/mpeg")
    );
    assert_eq!(response.body_bytes, STUB_AUDIO);

    let name = response.header("x-artifact-name").unwrap();
    assert!(name.starts_with("Hello_world_"), "unexpected name {name}");
    assert!(name.ends_with(".mp3"));

    assert_eq!(
        response.header("x-character-count").map(String::as_str),
        Some("11")
    );
    assert_eq!(response.header("x-language").map(String::as_str), Some("en"));

    let disposition = response.header("content-disposition").unwrap();
    assert!(disposition.contains(name.as_str()));
}

#[tokio::test]
#[serial]
async fn it_should_retain_the_artifact_after_the_interaction_sweep() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({"text": "Hello world", "language": "en"}),
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    // A sweep runs right after each synthesis; the fresh artifact survives it
    let listed = ctx.artifact_store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].size_bytes, STUB_AUDIO.len() as u64);
}

#[tokio::test]
#[serial]
async fn it_should_reject_empty_text() {
    let ctx = TestContext::new().await.unwrap();

    for text in ["", "   ", "\n\t "] {
        let response = ctx
            .client
            .post("/api/tts/synthesize", &json!({ "text": text }))
            .await
            .unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("empty");
    }
}

#[tokio::test]
#[serial]
async fn it_should_reject_oversized_text() {
    let ctx = TestContext::new().await.unwrap();

    let long_text = "a".repeat(5001);
    let response = ctx
        .client
        .post("/api/tts/synthesize", &json!({ "text": long_text }))
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
#[serial]
async fn it_should_reject_unknown_language_codes() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({"text": "Hello", "language": "xx"}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unsupported language code");
}

#[tokio::test]
#[serial]
async fn it_should_detect_language_when_not_given() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({
                "text": "Esto es una prueba en español. El rápido zorro marrón salta sobre el perro perezoso."
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("x-language").map(String::as_str), Some("es"));
}

#[tokio::test]
#[serial]
async fn it_should_propagate_provider_failures_without_writing() {
    let ctx = TestContext::failing_provider("network unreachable")
        .await
        .unwrap();

    let before = ctx.artifact_store.list().await.unwrap().len();

    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({"text": "Hello world", "language": "en"}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("network unreachable");

    // Nothing was written to the artifact directory
    let after = ctx.artifact_store.list().await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
#[serial]
async fn it_should_accept_the_slow_voice_flag() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/api/tts/synthesize",
            &json!({"text": "Hello world", "language": "en", "slow": true}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, STUB_AUDIO);
}
