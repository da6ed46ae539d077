use serde_json::Value;

/// Every listing card carries the normalized fields plus its fragment.
pub fn assert_listing_card(card: &Value) {
    assert!(
        card.get("id").and_then(|v| v.as_str()).is_some(),
        "Missing card id"
    );
    assert!(card.get("title").is_some(), "Missing card title");
    assert!(card.get("category").is_some(), "Missing card category");
    assert!(card.get("author").is_some(), "Missing card author");
    assert!(
        card.get("link").and_then(|v| v.get("kind")).is_some(),
        "Missing card link"
    );

    let html = card
        .get("html")
        .and_then(|v| v.as_str())
        .expect("Missing card html");
    assert!(html.contains("post-card"), "Fragment is not a card");
}

pub fn assert_page_info(page: &Value) {
    for field in [
        "current_page",
        "total_pages",
        "total_items",
        "window_pages",
        "has_prev",
        "has_next",
    ] {
        assert!(page.get(field).is_some(), "Missing page field {}", field);
    }
}

pub fn assert_fortune_extras(extras: &Value) {
    let numbers = extras
        .get("lucky_numbers")
        .and_then(|v| v.as_array())
        .expect("Missing lucky_numbers");
    assert_eq!(numbers.len(), 3, "Expected three lucky numbers");

    assert_eq!(
        extras
            .get("warnings")
            .and_then(|v| v.as_array())
            .map(|w| w.len()),
        Some(3),
        "Expected three warnings"
    );
    assert_eq!(
        extras
            .get("recommendations")
            .and_then(|v| v.as_array())
            .map(|r| r.len()),
        Some(4),
        "Expected four recommendations"
    );
    assert!(extras.get("quote").is_some(), "Missing quote");
    assert!(extras.get("sign").is_some(), "Missing sign");
}
