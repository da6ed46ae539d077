use axum::{
    extract::Request, http::HeaderValue, middleware, middleware::Next, response::Response,
    routing::get, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::controllers::{
    category::CategoryController, chat::ChatController, health, listing::ListingController,
    post::PostController, preferences::PreferencesController,
};
use crate::domain::sidebar::SidebarService;
use crate::infrastructure::config::Config;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tag every request with a fresh id and echo it in the response headers.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

/// Assemble the application router. Kept separate from the listener so the
/// e2e suite can serve the same app on an ephemeral port.
pub fn build_app(
    sidebar_service: Arc<SidebarService>,
    listing_controller: Arc<ListingController>,
    category_controller: Arc<CategoryController>,
    post_controller: Arc<PostController>,
    chat_controller: Arc<ChatController>,
    preferences_controller: Arc<PreferencesController>,
) -> Router {
    let listing_routes = Router::new()
        .route("/api/listing", get(ListingController::list))
        .with_state(listing_controller);

    let category_routes = Router::new()
        .route("/api/categories", get(CategoryController::get_categories))
        .with_state(category_controller);

    let post_routes = Router::new()
        .route("/api/post", get(PostController::get_post))
        .route("/api/post/related", get(PostController::get_related))
        .route("/api/posts/recent", get(PostController::get_recent))
        .with_state(post_controller);

    let chat_routes = Router::new()
        .route(
            "/api/chat",
            get(ChatController::status).post(ChatController::complete),
        )
        .with_state(chat_controller);

    let preferences_routes = Router::new()
        .route(
            "/api/preferences/title",
            get(PreferencesController::get_title).put(PreferencesController::set_title),
        )
        .with_state(preferences_controller);

    // the browser talks to us from the statically hosted site
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(sidebar_service)
        .merge(listing_routes)
        .merge(category_routes)
        .merge(post_routes)
        .merge(chat_routes)
        .merge(preferences_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    sidebar_service: Arc<SidebarService>,
    listing_controller: Arc<ListingController>,
    category_controller: Arc<CategoryController>,
    post_controller: Arc<PostController>,
    chat_controller: Arc<ChatController>,
    preferences_controller: Arc<PreferencesController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(
        sidebar_service,
        listing_controller,
        category_controller,
        post_controller,
        chat_controller,
        preferences_controller,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
