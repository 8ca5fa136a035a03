use std::net::SocketAddr;
use std::sync::Arc;

use axum::handler::Handler;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    services::ServeDir, trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_turf::config::Config;
use hello_turf::geo::GeoService;
use hello_turf::handlers::{self, AppState};
use hello_turf::mailer::Mailer;
use hello_turf::pages;

/// Main entry point for the application.
///
/// Initializes logging, configuration, the geolocation service, the outbound
/// mail client, and the template engine, then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hello_turf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize geolocation (local database optional, remote fallback)
    let geo = GeoService::new(&config);

    // Initialize outbound mail client when the mail API is configured
    let mailer = match (&config.mail_api_url, &config.mail_api_token) {
        (Some(url), Some(token)) => {
            match Mailer::new(url.clone(), token.clone(), config.email_from.clone()) {
                Ok(client) => {
                    tracing::info!("✓ Mail client initialized: {}", url);
                    Some(client)
                }
                Err(e) => {
                    tracing::error!("Failed to initialize mail client: {}", e);
                    None
                }
            }
        }
        _ => {
            tracing::warn!("MAIL_API_URL/MAIL_API_TOKEN not set, outbound email disabled");
            None
        }
    };

    // Compile templates
    let templates = pages::templates()
        .map_err(|e| anyhow::anyhow!("Template initialization failed: {}", e))?;
    tracing::info!("Templates compiled");

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        geo,
        mailer,
        templates,
    });

    // Configure rate limiter for the quote endpoint: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Quote submission with body cap and rate limiting
    let quote_routes = Router::new()
        .route("/quote/submit", post(handlers::submit_quote))
        .layer(
            ServiceBuilder::new()
                // Request size limit: 64KB max payload
                .layer(RequestBodyLimitLayer::new(64 * 1024))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Static assets from public/ at the site root; anything else gets the 404 page
    let static_files = ServeDir::new("public")
        .not_found_service(pages::not_found.with_state(app_state.clone()));

    let app = Router::new()
        .route("/", get(pages::home))
        .route("/services", get(pages::services_index))
        .route("/services/:slug", get(pages::service_detail))
        .route("/gallery", get(pages::gallery))
        .route("/contact", get(pages::contact))
        .route("/quote", get(pages::quote_form))
        .route("/privacy", get(pages::privacy))
        .route("/terms", get(pages::terms))
        .route("/sitemap.xml", get(pages::sitemap_xml))
        .route("/health", get(handlers::health))
        .merge(quote_routes)
        .fallback_service(static_files)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
