/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;
pub mod resolve;

pub use error::LayoutResponseError;
/// Re-export the engine for convenience
pub use vellum_engine;

use vellum_engine::{ContentStack, Locale, PageComposer};

/// A page served at `route`, wrapped in the dashboard shell.
#[derive(Debug, Clone)]
pub struct PageDef {
  pub route: String,
  pub content: ContentStack,
}

impl PageDef {
  pub fn new(route: impl Into<String>, content: ContentStack) -> Self {
    Self { route: route.into(), content }
  }
}

/// Collects the composer, pages and supported locales, then turns them into
/// an Axum router.
pub struct LayoutServer {
  composer: PageComposer,
  pages: Vec<PageDef>,
  locales: Vec<Locale>,
}

impl LayoutServer {
  pub fn new(composer: PageComposer) -> Self {
    Self { composer, pages: Vec::new(), locales: Vec::new() }
  }

  /// Register a page. `page.route` must be a static axum path; parameter
  /// or wildcard segments panic when the router is built.
  pub fn page(mut self, page: PageDef) -> Self {
    self.pages.push(page);
    self
  }

  /// Restrict locale negotiation to `locales`. Left empty, any well-formed
  /// tag from the request is honored.
  pub fn locales(mut self, locales: Vec<Locale>) -> Self {
    self.locales = locales;
    self
  }

  pub fn into_router(self) -> axum::Router {
    handler::build_router(self.composer, self.pages, self.locales)
  }

  pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Vellum dashboard running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}
