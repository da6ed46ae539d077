use crate::e2e::helpers;

use helpers::assertions::assert_fortune_extras;
use helpers::fixtures::Behavior;
use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_the_post_detail(ctx: &TestContext) {
    let response = ctx.client.get("/api/post?id=1").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("id").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(
        body.get("title").and_then(|v| v.as_str()),
        Some("혈압을 낮추는 7가지 생활 습관")
    );
    assert_eq!(
        body.get("category_slug").and_then(|v| v.as_str()),
        Some("health")
    );
    assert_eq!(body.get("date_text").and_then(|v| v.as_str()), Some("2026년 1월 10일"));
    // not a horoscope: no extras
    assert!(body.get("fortune").is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_count_views_across_visits(ctx: &TestContext) {
    let first = ctx.client.get("/api/post?id=3").await.unwrap();
    first.assert_status(StatusCode::OK);
    assert_eq!(
        first.body.as_ref().unwrap().get("views").and_then(|v| v.as_i64()),
        Some(1)
    );

    let second = ctx.client.get("/api/post?id=3").await.unwrap();
    assert_eq!(
        second.body.as_ref().unwrap().get("views").and_then(|v| v.as_i64()),
        Some(2)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_the_id_parameter(ctx: &TestContext) {
    let response = ctx.client.get("/api/post").await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("게시글 ID가 없습니다.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_a_malformed_id(ctx: &TestContext) {
    let response = ctx.client.get("/api/post?id=abc").await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_error_message("잘못된 게시글 ID입니다.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_an_unknown_id(ctx: &TestContext) {
    let response = ctx.client.get("/api/post?id=999").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_error_message("게시글을 찾을 수 없습니다.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_decorate_horoscope_posts(ctx: &TestContext) {
    let response = ctx.client.get("/api/post?id=2").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let extras = body.get("fortune").expect("fortune extras");
    assert_fortune_extras(extras);
    assert_eq!(extras.get("sign").and_then(|v| v.as_str()), Some("말띠"));

    // the embedded date token is rewritten away from the authoring date
    let content = body.get("content").and_then(|v| v.as_str()).unwrap();
    assert!(!content.contains("2025년 10월 31일"));
    assert!(content.contains("말띠 운세입니다"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_related_posts_from_the_same_category(ctx: &TestContext) {
    let response = ctx.client.get("/api/post/related?id=1").await.unwrap();
    response.assert_status(StatusCode::OK);

    let related = response.body.as_ref().unwrap().as_array().unwrap().clone();
    // two other health posts in the fixtures
    assert_eq!(related.len(), 2);
    assert!(related
        .iter()
        .all(|p| p.get("id").and_then(|v| v.as_i64()) != Some(1)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_recent_posts(ctx: &TestContext) {
    let response = ctx.client.get("/api/posts/recent").await.unwrap();
    response.assert_status(StatusCode::OK);

    let recent = response.body.as_ref().unwrap().as_array().unwrap().clone();
    assert_eq!(recent.len(), 4); // all fixtures, capped at five
    assert_eq!(recent[0].get("id").and_then(|v| v.as_i64()), Some(1));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_readably_when_the_posts_document_is_down(ctx: &TestContext) {
    ctx.origin.set("posts.json", Behavior::Status(500));

    let response = ctx.client.get("/api/post?id=1").await.unwrap();
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_error_message("게시글을 불러오는 중 오류가 발생했습니다.");
}
