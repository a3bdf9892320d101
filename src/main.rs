mod config;
mod error;
mod handlers;
mod logging;
mod middleware;
mod router;
mod state;
mod utils;
mod view;

use clap::Parser;

#[tokio::main]
async fn main() {
    let mut config = config::Config::parse();
    let _log_guard = logging::init(&config.log_level);

    if let Err(e) = config.resolve_served_dir() {
        tracing::error!(
            dir = %config.dir_to_serve.display(),
            error = %e,
            "could not resolve directory to serve"
        );
        std::process::exit(1);
    }

    tracing::info!(?config, "current configuration");
    tracing::info!(dir = %config.dir_to_serve.display(), "serving files from");

    let addr = config.listen_addr();
    let state = state::AppState::new(config);
    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            _ = wait_for_ctrl_c() => {},
            _ = terminate.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        wait_for_ctrl_c().await;
    }

    tracing::info!("shutdown signal received, stopping server");
}

async fn wait_for_ctrl_c() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
