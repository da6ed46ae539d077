use dailywell_backend::infrastructure::config::{Config, LogFormat};
use dailywell_backend::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting DailyWell100 Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        content_base_url = %config.content_base_url,
        "Content sources configured"
    );

    if config.chat_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set. Chat requests will fail with a configuration message.");
    }

    // Open the local key-value store (view counts, preference flag)
    let kv = Arc::new(dailywell_backend::infrastructure::kv::KvStore::open(config.kv_store_path.clone()).await);
    tracing::info!(path = %config.kv_store_path, "Key-value store opened");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate content sources (shared fetch client)
    tracing::info!("Instantiating content sources...");
    let source_client = Arc::new(dailywell_backend::infrastructure::sources::SourceClient::new(
        config.content_base_url.clone(),
    ));
    let posts_source = Arc::new(dailywell_backend::infrastructure::sources::PostsSource::new(source_client.clone()));
    let policy_news_source = Arc::new(dailywell_backend::infrastructure::sources::PolicyNewsSource::new(source_client.clone()));
    let travel_source = Arc::new(dailywell_backend::infrastructure::sources::TravelSource::new(source_client.clone()));
    let category_source = Arc::new(dailywell_backend::infrastructure::sources::CategorySource::new(source_client.clone()));

    // 2. Instantiate the chat upstream client
    let chat_upstream = config.chat_api_key.clone().map(|api_key| {
        Arc::new(dailywell_backend::infrastructure::chat::ChatUpstreamClient::new(
            config.chat_upstream_url.clone(),
            api_key,
        ))
    });

    // 3. Instantiate services (inject sources and clients)
    tracing::info!("Instantiating services...");
    let listing_service = Arc::new(dailywell_backend::domain::listing::ListingService::new(vec![
        posts_source.clone() as Arc<dyn dailywell_backend::infrastructure::sources::ContentSource>,
        policy_news_source.clone(),
        travel_source.clone(),
    ]));
    let sidebar_service = Arc::new(dailywell_backend::domain::sidebar::SidebarService::new(
        category_source.clone(),
    ));
    let post_service = Arc::new(dailywell_backend::domain::post::PostService::new(
        posts_source.clone(),
        kv.clone(),
    ));
    let chat_service = Arc::new(dailywell_backend::domain::chat::ChatService::new(chat_upstream));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let listing_controller = Arc::new(dailywell_backend::controllers::listing::ListingController::new(listing_service));
    let category_controller = Arc::new(dailywell_backend::controllers::category::CategoryController::new(sidebar_service.clone()));
    let post_controller = Arc::new(dailywell_backend::controllers::post::PostController::new(post_service));
    let chat_controller = Arc::new(dailywell_backend::controllers::chat::ChatController::new(chat_service));
    let preferences_controller = Arc::new(dailywell_backend::controllers::preferences::PreferencesController::new(kv.clone()));

    // Start HTTP server with all routes
    start_http_server(
        config,
        sidebar_service,
        listing_controller,
        category_controller,
        post_controller,
        chat_controller,
        preferences_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "dailywell_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "dailywell_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
