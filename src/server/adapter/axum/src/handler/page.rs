/* src/server/adapter/axum/src/handler/page.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{MatchedPath, Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use vellum_engine::RenderContext;

use super::{AppState, compose_blocking};
use crate::error::LayoutResponseError;

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  Query(query): Query<HashMap<String, String>>,
  headers: HeaderMap,
) -> Result<Html<String>, LayoutResponseError> {
  let page = state.pages.get(matched.as_str()).cloned().ok_or_else(|| {
    LayoutResponseError::Internal(format!("no page registered for '{}'", matched.as_str()))
  })?;

  let locale = state.request_locale(query.get("lang").map(String::as_str), &headers);
  let ctx = RenderContext { locale, content: page.content.clone() };
  let html = compose_blocking(state, ctx).await?;
  Ok(Html(html.into_string()))
}
