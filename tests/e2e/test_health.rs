use crate::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_running_banner_at_root(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("message").and_then(|v| v.as_str()),
        Some("AI Text-to-Speech API is running!")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_healthy_status(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("healthy"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_health_responses(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    // All health checks should succeed
    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_fixed_bodies_regardless_of_prior_traffic(ctx: &TestContext) {
    // Drive some synthesis traffic first, both successful and failing
    let _ = ctx
        .client
        .post("/api/text-to-speech", &serde_json::json!({"text": "Hello"}))
        .await
        .unwrap();
    let _ = ctx
        .client
        .post("/api/text-to-speech", &serde_json::json!({"text": ""}))
        .await
        .unwrap();

    let response = ctx.client.get("/").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.as_ref().unwrap(),
        &serde_json::json!({"message": "AI Text-to-Speech API is running!"})
    );

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.as_ref().unwrap(),
        &serde_json::json!({"status": "healthy"})
    );
}
