use crate::e2e::helpers;

use helpers::fixtures::Behavior;
use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_ready_while_the_content_origin_answers(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(
        body.get("content").and_then(|v| v.as_str()),
        Some("reachable")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_not_ready_when_the_category_document_fails(ctx: &TestContext) {
    ctx.origin.set("categories.json", Behavior::Status(500));

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("status").and_then(|v| v.as_str()),
        Some("not_ready")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_every_response(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/api/listing").await.unwrap();
    response.assert_header_exists("x-request-id");
}
