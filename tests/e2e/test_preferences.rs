use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_start_with_no_saved_title(ctx: &TestContext) {
    let response = ctx.client.get("/api/preferences/title").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert!(body.get("title").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_save_and_return_the_title(ctx: &TestContext) {
    let response = ctx
        .client
        .put("/api/preferences/title", &json!({"title": "할머니"}))
        .await
        .unwrap();
    response.assert_status(StatusCode::NO_CONTENT);

    let response = ctx.client.get("/api/preferences/title").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response
            .body
            .as_ref()
            .unwrap()
            .get("title")
            .and_then(|v| v.as_str()),
        Some("할머니")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_empty_title(ctx: &TestContext) {
    let response = ctx
        .client
        .put("/api/preferences/title", &json!({"title": "  "}))
        .await
        .unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("호칭을 입력해주세요.");
}
