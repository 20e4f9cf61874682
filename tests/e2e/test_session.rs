use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn it_should_start_with_an_empty_session() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/api/session").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["text"].as_str(), Some(""));
    assert_eq!(body["chars"].as_u64(), Some(0));
}

#[tokio::test]
#[serial]
async fn it_should_replace_the_session_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .put("/api/session", &json!({"text": "Hola mundo"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["text"].as_str(), Some("Hola mundo"));
    assert_eq!(body["chars"].as_u64(), Some(10));

    // The replacement is visible on the next read
    let response = ctx.client.get("/api/session").await.unwrap();
    assert_eq!(
        response.body.as_ref().unwrap()["text"].as_str(),
        Some("Hola mundo")
    );
}

#[tokio::test]
#[serial]
async fn it_should_load_the_example_passage() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.post_empty("/api/session/example").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("Franz Kafka"));
    assert!(body["chars"].as_u64().unwrap() > 0);
}

#[tokio::test]
#[serial]
async fn it_should_clear_the_session_text() {
    let ctx = TestContext::new().await.unwrap();

    ctx.client
        .post_empty("/api/session/example")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx.client.post_empty("/api/session/clear").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["text"].as_str(), Some(""));
    assert_eq!(body["chars"].as_u64(), Some(0));
}
