use crate::e2e::helpers;

use helpers::assertions::{assert_listing_card, assert_page_info};
use helpers::fixtures::Behavior;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::Value;
use test_context::test_context;

fn items(body: &Value) -> &Vec<Value> {
    body.get("items")
        .and_then(|v| v.as_array())
        .expect("items array")
}

fn page(body: &Value) -> &Value {
    body.get("page").expect("page metadata")
}

// Default fixtures: 4 posts + 2 news + 15 travel spots = 21 merged items.

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_merge_all_sources_into_one_listing(ctx: &TestContext) {
    let response = ctx.client.get("/api/listing").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        page(body).get("total_items").and_then(|v| v.as_u64()),
        Some(21)
    );
    // articles page size: ten per page
    assert_eq!(items(body).len(), 10);
    assert_page_info(page(body));
    for card in items(body) {
        assert_listing_card(card);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_serving_when_one_source_fails(ctx: &TestContext) {
    ctx.origin.set("korea_now.json", Behavior::Status(500));

    let response = ctx.client.get("/api/listing").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    // the two news items are gone, everything else survives
    assert_eq!(
        page(body).get("total_items").and_then(|v| v.as_u64()),
        Some(19)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_treat_garbage_json_like_a_dead_source(ctx: &TestContext) {
    ctx.origin.set("go_now.json", Behavior::Garbage);

    let response = ctx.client.get("/api/listing").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        page(body).get("total_items").and_then(|v| v.as_u64()),
        Some(6)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_the_requested_page(ctx: &TestContext) {
    let response = ctx.client.get("/api/listing?page=3").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        page(body).get("current_page").and_then(|v| v.as_u64()),
        Some(3)
    );
    // 21 items, ten per page: the last page holds one
    assert_eq!(items(body).len(), 1);
    assert_eq!(page(body).get("has_next").and_then(|v| v.as_bool()), Some(false));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clamp_out_of_range_pages(ctx: &TestContext) {
    let response = ctx.client.get("/api/listing?page=999").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        page(body).get("current_page").and_then(|v| v.as_u64()),
        Some(3)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_category_slug(ctx: &TestContext) {
    let response = ctx.client.get("/api/listing?filter=health").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        page(body).get("total_items").and_then(|v| v.as_u64()),
        Some(3)
    );
    for card in items(body) {
        assert_eq!(
            card.get("category").and_then(|v| v.as_str()),
            Some("건강상식")
        );
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_page_travel_listings_by_twelve(ctx: &TestContext) {
    let response = ctx.client.get("/api/listing?filter=go-now").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        page(body).get("total_items").and_then(|v| v.as_u64()),
        Some(15)
    );
    assert_eq!(items(body).len(), 12);
    assert_eq!(
        page(body).get("total_pages").and_then(|v| v.as_u64()),
        Some(2)
    );
    // two pages: the widget renders
    let pagination = body
        .get("pagination_html")
        .and_then(|v| v.as_str())
        .unwrap();
    assert!(pagination.contains("page-item"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_travel_by_region_token(ctx: &TestContext) {
    // filter=부산, percent-encoded
    let response = ctx
        .client
        .get("/api/listing?filter=%EB%B6%80%EC%82%B0")
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let total = page(body).get("total_items").and_then(|v| v.as_u64()).unwrap();
    assert_eq!(total, 5); // indexes 1, 4, 7, 10, 13 of the fifteen fixtures
    for card in items(body) {
        assert!(card
            .get("address")
            .and_then(|v| v.as_str())
            .unwrap()
            .starts_with("부산"));
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_search_across_titles_and_summaries(ctx: &TestContext) {
    let response = ctx.client.get("/api/listing?q=%ED%98%88%EC%95%95").await.unwrap(); // 혈압
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        page(body).get("total_items").and_then(|v| v.as_u64()),
        Some(1)
    );
    assert!(items(body)[0]
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap()
        .contains("혈압"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_escape_hostile_titles_in_card_fragments(ctx: &TestContext) {
    let response = ctx.client.get("/api/listing?filter=health").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let hostile = items(body)
        .iter()
        .find(|card| card.get("id").and_then(|v| v.as_str()) == Some("posts_4"))
        .expect("hostile fixture present");

    let html = hostile.get("html").and_then(|v| v.as_str()).unwrap();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_an_empty_first_page_when_everything_fails(ctx: &TestContext) {
    ctx.origin.set("posts.json", Behavior::Status(500));
    ctx.origin.set("korea_now.json", Behavior::Status(500));
    ctx.origin.set("go_now.json", Behavior::Status(500));

    let response = ctx.client.get("/api/listing").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(items(body).len(), 0);
    assert_eq!(
        page(body).get("total_pages").and_then(|v| v.as_u64()),
        Some(1)
    );
}
