use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use disco_embed::config::Config;
use disco_embed::handlers;
use disco_embed::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration first: APP_ENV decides the log format.
    let config = Config::from_env();

    // Initialize tracing: JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("disco_embed=info,tower_http=info"));

    let json_logs = config.as_ref().map(|c| c.is_production).unwrap_or(false);
    if json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Disco.pics embed server starting...");

    let config = config.expect("Failed to load configuration");
    info!(
        api_base_url = %config.api_base_url,
        hostname_override = config.hostname_override.as_deref().unwrap_or("-"),
        "Configuration loaded"
    );
    if config.is_dev {
        info!("Development mode: image lookups use the configured hostname");
    }

    let app_state = AppState::from_config(&config).expect("Failed to build HTTP client");

    // Prometheus metrics layer
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = handlers::build_router(app_state)
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http());

    let addr = config.server_addr();
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
