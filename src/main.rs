use moodify::{load_data, router, AppState, Config};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let catalog = config.load_catalog().await?;

    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let data = load_data(&config.data_path).await;
    info!(
        "loaded {} mood entries from {}",
        data.moods.len(),
        config.data_path.display()
    );

    let app = router(AppState::new(config.data_path.clone(), data, catalog));

    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
