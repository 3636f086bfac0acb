/* src/server/adapter/axum/src/handler/render.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use vellum_engine::{ContentStack, RenderContext};

use super::{AppState, compose_blocking};
use crate::error::LayoutResponseError;

#[derive(serde::Deserialize)]
struct RenderRequest {
  #[serde(default)]
  locale: Option<String>,
  #[serde(default)]
  content: Vec<String>,
}

pub(super) async fn handle_health() -> impl IntoResponse {
  axum::Json(serde_json::json!({"ok": true}))
}

/// Compose an ad-hoc document from a JSON body. Without an explicit
/// `locale`, the request headers decide.
pub(super) async fn handle_render(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  body: axum::body::Bytes,
) -> Result<Html<String>, LayoutResponseError> {
  let req: RenderRequest =
    serde_json::from_slice(&body).map_err(|e| LayoutResponseError::Validation(e.to_string()))?;

  let content: ContentStack = req.content.into_iter().collect();
  let ctx = match req.locale {
    Some(ref raw) => RenderContext::with_fallback(raw, content, state.composer.default_locale()),
    None => RenderContext { locale: state.request_locale(None, &headers), content },
  };
  let html = compose_blocking(state, ctx).await?;
  Ok(Html(html.into_string()))
}
