use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use profile_quiz::AppState;
use profile_quiz::app::build_app;
use profile_quiz::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    let catalog = config.load_catalog().context("loading quiz catalog")?;
    tracing::info!(
        questions = catalog.question_count(),
        profiles = catalog.profiles().len(),
        "catalog loaded"
    );

    let app = build_app(
        AppState::new(catalog, config.event_buffer as usize),
        &config.ws_path,
    );

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(path = %config.ws_path, "listening on {}", listener.local_addr()?);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
