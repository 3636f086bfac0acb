/* src/cli/core/src/partials.rs */

// File-backed region renderers and composer assembly from config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vellum_engine::{
  BoxError, ContentStack, Markup, PageComposer, Region, RegionRenderer, Regions, RenderContext,
};

use crate::config::VellumConfig;

/// Region backed by a partial file, read on every render so edits show up
/// without a restart. A missing file fails the region, not the process.
#[derive(Debug, Clone)]
pub(crate) struct FileRegion {
  path: PathBuf,
}

impl FileRegion {
  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }
}

impl RegionRenderer for FileRegion {
  fn render(&self, _ctx: &RenderContext) -> Result<Markup, BoxError> {
    let html = std::fs::read_to_string(&self.path)
      .map_err(|e| format!("failed to read partial {}: {e}", self.path.display()))?;
    Ok(Markup::raw(html))
  }
}

pub(crate) fn build_composer(config: &VellumConfig, base_dir: &Path) -> Result<PageComposer> {
  let mut builder = Regions::builder();
  for region in Region::ALL {
    let path = config.partials.path(base_dir, region);
    tracing::debug!(%region, path = %path.display(), "binding partial");
    builder = builder.region(region, FileRegion::new(path));
  }
  let regions = builder.build()?;
  Ok(
    PageComposer::new(regions)
      .with_attrs(config.layout.shell.clone())
      .with_default_locale(config.layout.default_locale()?),
  )
}

/// Read content fragment files, in order, into a content stack.
pub(crate) fn load_content(base_dir: &Path, files: &[impl AsRef<Path>]) -> Result<ContentStack> {
  let mut stack = ContentStack::new();
  for file in files {
    let path = base_dir.join(file);
    let html = std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read content {}", path.display()))?;
    stack.push(html);
  }
  Ok(stack)
}
