mod config;
mod http;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use config::{Config, LogFormat};

fn init_tracing(log_format: LogFormat) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
  match log_format {
    LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    LogFormat::Json => tracing_subscriber::fmt()
      .json()
      .with_env_filter(filter)
      .init(),
  }
}

pub async fn serve() -> Result<()> {
  let config = Config::from_env()?;
  init_tracing(config.log_format);
  http::http_server_task(&config).await
}
