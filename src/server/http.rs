use std::{io, path::Path};

use anyhow::{Context, Result};
use axum::{
  extract,
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  routing::{get, get_service},
  Router,
};
use include_dir::{include_dir, Dir};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::Config;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

fn static_file(path: &str) -> Response {
  let path = path.trim_start_matches('/');
  let Some(file) = STATIC_DIR.get_file(path) else {
    tracing::debug!(path, "static asset not found");
    return StatusCode::NOT_FOUND.into_response();
  };
  let mime = mime_guess::from_path(path).first_or_octet_stream();
  ([(header::CONTENT_TYPE, mime.as_ref())], file.contents()).into_response()
}

async fn index() -> Response {
  static_file("index.html")
}

async fn static_asset(extract::Path(path): extract::Path<String>) -> Response {
  static_file(&path)
}

async fn handle_io_error(err: io::Error) -> impl IntoResponse {
  tracing::error!(%err, "failed to serve wasm bundle");
  (StatusCode::INTERNAL_SERVER_ERROR, format!("I/O error: {err}"))
}

pub fn router(pkg_dir: &Path) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/static/*path", get(static_asset))
    .nest_service(
      "/pkg",
      get_service(ServeDir::new(pkg_dir)).handle_error(handle_io_error),
    )
    .layer(TraceLayer::new_for_http())
}

pub async fn http_server_task(config: &Config) -> Result<()> {
  let app = router(&config.pkg_dir);
  tracing::info!(
    addr = %config.addr,
    pkg_dir = %config.pkg_dir.display(),
    "serving user cards"
  );
  axum::Server::try_bind(&config.addr)
    .with_context(|| format!("failed to bind {}", config.addr))?
    .serve(app.into_make_service())
    .await?;
  Ok(())
}
