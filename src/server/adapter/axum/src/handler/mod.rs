/* src/server/adapter/axum/src/handler/mod.rs */

mod page;
mod render;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use vellum_engine::{Locale, Markup, PageComposer, RenderContext};

use crate::PageDef;
use crate::error::LayoutResponseError;
use crate::resolve::{ResolveContext, resolve_locale};

pub(crate) struct AppState {
  pub composer: PageComposer,
  pub pages: HashMap<String, Arc<PageDef>>,
  pub locales: Vec<Locale>,
}

impl AppState {
  /// Resolve the request locale from query, cookie and Accept-Language.
  pub(crate) fn request_locale(&self, query_locale: Option<&str>, headers: &HeaderMap) -> Locale {
    resolve_locale(&ResolveContext {
      query_locale,
      cookie_header: headers.get(axum::http::header::COOKIE).and_then(|v| v.to_str().ok()),
      accept_language: headers
        .get(axum::http::header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok()),
      locales: &self.locales,
      default_locale: self.composer.default_locale(),
    })
  }
}

/// Compose off the async runtime: region renderers may touch the filesystem.
pub(crate) async fn compose_blocking(
  state: Arc<AppState>,
  ctx: RenderContext,
) -> Result<Markup, LayoutResponseError> {
  tokio::task::spawn_blocking(move || state.composer.compose(&ctx))
    .await
    // JoinError -> Internal (task panic)
    .map_err(|e| LayoutResponseError::Internal(e.to_string()))?
    .map_err(LayoutResponseError::from)
}

pub(crate) fn build_router(
  composer: PageComposer,
  pages: Vec<PageDef>,
  locales: Vec<Locale>,
) -> Router {
  let mut page_map = HashMap::new();
  let mut router = Router::new()
    .route("/_vellum/health", get(render::handle_health))
    .route("/_vellum/render", post(render::handle_render));

  for page in pages {
    let route = page.route.clone();
    tracing::debug!(route = %route, fragments = page.content.len(), "registering page");
    page_map.insert(route.clone(), Arc::new(page));
    router = router.route(&route, get(page::handle_page));
  }

  let state = Arc::new(AppState { composer, pages: page_map, locales });

  router.with_state(state)
}
