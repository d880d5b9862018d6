use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use emotion_detector::WatsonEmotionClient;
use emotion_detector::config::{Config, WatsonConfig};
use emotion_detector::server::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_json);
    tracing::info!("Starting emotion detector with config: {:?}", config);

    let watson_config = WatsonConfig::from(&config);
    let client = WatsonEmotionClient::new(watson_config)?;
    tracing::info!(
        url = %client.config().url,
        timeout = ?client.config().timeout,
        "Emotion service client created"
    );

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let app = router(AppState::new(Arc::new(client)))
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.server_address()).await?;
    tracing::info!("Server running on http://{}", config.server_address());

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,emotion_detector=debug".into());

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
