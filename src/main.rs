use donor_registry::infrastructure::config::ServerConfig;
use donor_registry::infrastructure::repositories::json_file::JsonFileDonorRepository;
use donor_registry::infrastructure::state::AppState;
use donor_registry::presentation;

use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::future::Future;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_with_signal().await
}

async fn run_with_signal() -> anyhow::Result<()> {
    run(async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run<F>(shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();

    // Tests may call this more than once
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "donor_registry=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let config = ServerConfig::from_env();

    let (listener, app) = bootstrap(&config).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

async fn bootstrap(
    config: &ServerConfig,
) -> anyhow::Result<(tokio::net::TcpListener, axum::Router)> {
    let repo = JsonFileDonorRepository::new(&config.data_file);

    // Create the store up front so a bad path fails at startup.
    // Unparsable contents only degrade reads.
    if let Err(e) = repo.load().await {
        if e.downcast_ref::<serde_json::Error>().is_none() {
            return Err(e);
        }
        tracing::error!("Donor data is unreadable, serving an empty list: {:#}", e);
    }
    tracing::info!("Donor data stored in {}", repo.path().display());

    let cors = presentation::middleware::cors::cors_layer()?;
    let app = presentation::router::app_with_cors(AppState::new(Arc::new(repo)), cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening at http://{}", listener.local_addr()?);

    Ok((listener, app))
}
