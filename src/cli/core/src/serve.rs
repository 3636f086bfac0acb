/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Result, anyhow};
use vellum_server_axum::{LayoutServer, PageDef};

use crate::config::VellumConfig;
use crate::partials::{build_composer, load_content};

/// Port precedence: `--port`, then `PORT`, then `[server].port`.
pub(crate) fn resolve_port(flag: Option<u16>, env: Option<&str>, config: &VellumConfig) -> u16 {
  flag.or_else(|| env.and_then(|v| v.parse().ok())).unwrap_or(config.server.port)
}

pub(crate) fn build_server(config: &VellumConfig, base_dir: &Path) -> Result<LayoutServer> {
  let composer = build_composer(config, base_dir)?;
  let mut server = LayoutServer::new(composer).locales(config.layout.parsed_locales()?);
  for page in &config.pages {
    let content = load_content(base_dir, &page.content)?;
    server = server.page(PageDef::new(page.route.clone(), content));
  }
  Ok(server)
}

pub(crate) async fn run_serve(config: &VellumConfig, base_dir: &Path, port: u16) -> Result<()> {
  let server = build_server(config, base_dir)?;
  let addr = format!("0.0.0.0:{port}");
  tracing::info!(pages = config.pages.len(), %addr, "starting server");
  server.serve(&addr).await.map_err(|e| anyhow!("server error: {e}"))
}
