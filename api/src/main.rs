use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use calorie_tracker_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal(handle: axum_server::Handle) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    info!("shutting down");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                args.server.host, args.server.port
            )
        })?;

    let app_state = state(args.clone())?;
    let router = router(app_state)?;

    let handle = axum_server::Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    info!("listening on http://{}{}/", addr, args.server.root_path);

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
