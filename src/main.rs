use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use hyperlocal_events::config::{Settings, StorageBackend};
use hyperlocal_events::core::Recommender;
use hyperlocal_events::models::RecommendationSettings;
use hyperlocal_events::routes::{self, AppState};
use hyperlocal_events::services::{
    seed_if_empty, CachedEventStore, EventStore, InMemoryEventStore, OpenAiGenerator, PostgresEventStore,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the [logging] table applies
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io_error(e)
    })?;

    // Initialize logging; LOG_LEVEL / LOG_FORMAT override the file
    let logging = settings.logging.clone().with_overrides(
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("LOG_FORMAT").ok(),
    );

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)))
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting Hyperlocal Events service...");
    info!("Configuration loaded successfully");

    // Initialize the event store
    let base_store: Arc<dyn EventStore> = match settings.storage.backend {
        StorageBackend::Postgres => {
            let store = PostgresEventStore::from_settings(
                &settings.database.url,
                settings.database.max_connections,
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
                settings.database.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                io_error(e)
            })?;
            info!("PostgreSQL event store initialized");
            Arc::new(store)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory event store; data is lost on restart");
            Arc::new(InMemoryEventStore::new())
        }
    };

    let store: Arc<dyn EventStore> = if settings.cache.enabled {
        info!("Event snapshot cache enabled (TTL: {}s)", settings.cache.snapshot_ttl_secs);
        Arc::new(CachedEventStore::new(base_store, settings.cache.snapshot_ttl_secs))
    } else {
        base_store
    };

    if settings.storage.seed_sample_events {
        if let Err(e) = seed_if_empty(store.as_ref()).await {
            error!("Failed to seed sample events: {}", e);
        }
    }

    // Initialize the text generator
    if settings.openai.api_key.is_empty() {
        warn!("No OpenAI API key configured; chat requests will fail");
    }

    let generator = OpenAiGenerator::new(
        settings.openai.base_url.clone(),
        settings.openai.api_key.clone(),
        settings.openai.model.clone(),
        settings.openai.temperature,
        Duration::from_secs(settings.openai.request_timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to build HTTP client: {}", e);
        io_error(e)
    })?;

    let recommendation_settings = RecommendationSettings::from(&settings.recommendation);
    info!("Recommender initialized with settings: {:?}", recommendation_settings);

    let recommender = Recommender::new(Arc::new(generator), store.clone(), recommendation_settings);

    // Build application state
    let app_state = AppState { store, recommender };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
