mod config;

use anyhow::Result;
use tracing::{info, warn};

use back2me_api::auth::AppStateInner;
use back2me_store::{Store, seed::seed_sample_data};

use crate::config::Config;

fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "back2me=debug,back2me_api=debug,back2me_store=debug,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;

    // Fixed-size worker pool; every request runs to completion on one worker.
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()?
        .block_on(serve(config))
}

async fn serve(config: Config) -> Result<()> {
    let store = Store::new(config.credential_scheme);
    if config.seed_sample_data {
        seed_sample_data(&store)?;
    }

    let state = AppStateInner::new(store);
    let app = back2me_api::router(state);

    let addr = config.addr()?;
    info!("Back2Me server listening on {} ({} workers)", addr, config.workers);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped; in-memory state discarded");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                warn!("Could not install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
