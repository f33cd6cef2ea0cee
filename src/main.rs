use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use scran_it::config::{LogFormat, Settings};
use scran_it::core::Matcher;
use scran_it::routes::{self, handle_query_payload_error, AppState};
use scran_it::services::CatalogStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.output() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Text => subscriber.init(),
    }

    info!("Starting Scran It search service...");

    let catalog = Arc::new(CatalogStore::new(
        &settings.catalog.venues_path,
        &settings.catalog.chains_path,
        settings.catalog.cache_capacity,
    ));

    // Warm the cache and surface an unreadable catalog early; search still degrades to empty
    if let Err(e) = catalog.try_load_venues().await {
        error!("Venue catalog not readable at startup: {}", e);
    }
    if let Err(e) = catalog.try_load_chain_brands().await {
        error!("Chain list not readable at startup: {}", e);
    }

    let matcher = Matcher::new(settings.search.nearby_defaults());
    let fallback = settings.search.fallback();

    info!(
        "Matcher initialized with nearby defaults {:?}, fallback ({}, {})",
        matcher.nearby_defaults(),
        fallback.lat,
        fallback.lng
    );

    let app_state = AppState {
        catalog,
        matcher,
        fallback,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
