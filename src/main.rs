//! Fuzzy sentiment service: binary entrypoint.
//! Boots the Axum HTTP server with the configured classifier.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fuzzy_sentiment::{api, metrics::Metrics};

const ENV_ADDR: &str = "FUZZY_SENTIMENT_ADDR";
const ENV_METRICS: &str = "FUZZY_SENTIMENT_METRICS";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fuzzy_sentiment=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let classifier = fuzzy_sentiment::classifier_from_env()?;
    info!(
        rules = classifier.engine().config().rules.len(),
        lexicon_words = classifier.lexicon().len(),
        "classifier ready"
    );

    let mut app = api::router(api::AppState::new(classifier));
    if std::env::var(ENV_METRICS).ok().is_some_and(|v| v == "1") {
        let metrics = Metrics::init()?;
        app = app.merge(metrics.router());
        info!("metrics exposed at /metrics");
    }

    let addr: SocketAddr = std::env::var(ENV_ADDR)
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .with_context(|| format!("parsing {ENV_ADDR}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app).await.context("http server")?;
    Ok(())
}
