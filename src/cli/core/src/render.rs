/* src/cli/core/src/render.rs */

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vellum_engine::RenderContext;

use crate::config::VellumConfig;
use crate::partials::{build_composer, load_content};

/// Compose one document from the configured partials and write it to `out`
/// or stdout.
pub(crate) fn run_render(
  config: &VellumConfig,
  base_dir: &Path,
  locale: Option<&str>,
  content: &[PathBuf],
  out: Option<&Path>,
) -> Result<()> {
  let composer = build_composer(config, base_dir)?;
  // Content paths come from the command line, so they resolve against cwd.
  let stack = load_content(Path::new("."), content)?;
  let ctx = RenderContext::with_fallback(locale.unwrap_or(""), stack, composer.default_locale());
  tracing::info!(locale = %ctx.locale, fragments = ctx.content.len(), "rendering page");

  let html = composer.compose(&ctx)?;

  match out {
    Some(path) => {
      if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
          std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
        }
      }
      std::fs::write(path, html.as_str())
        .with_context(|| format!("failed to write {}", path.display()))?;
      tracing::info!(path = %path.display(), bytes = html.as_str().len(), "wrote page");
    }
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(html.as_str().as_bytes()).context("failed to write to stdout")?;
      stdout.flush().context("failed to flush stdout")?;
    }
  }
  Ok(())
}
