
use calc_service::config::Config;
use calc_service::service;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let config = Config::parse();
  let addr = config.socket_addr();
  let listener = TcpListener::bind(addr).await
    .with_context(|| format!("failed to bind {}", addr))?;
  log::info!("Server starting on {}", listener.local_addr()?);

  axum::serve(listener, service::router())
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;
  log::info!("Server stopped");
  Ok(())
}

async fn shutdown_signal() {
  match tokio::signal::ctrl_c().await {
    Ok(()) => log::info!("Shutdown signal received, draining connections"),
    Err(err) => {
      // Without a signal handler, run until killed.
      log::error!("Failed to install Ctrl-C handler: {}", err);
      std::future::pending::<()>().await
    }
  }
}
