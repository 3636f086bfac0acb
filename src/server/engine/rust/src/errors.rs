/* src/server/engine/rust/src/errors.rs */

use crate::region::Region;

/// Boxed error returned by region renderers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
  /// A region renderer could not produce its fragment. The whole document is
  /// abandoned; no partial markup is returned.
  #[error("region '{region}' failed to render: {source}")]
  RegionRender {
    region: Region,
    #[source]
    source: BoxError,
  },

  #[error("no renderer registered for region '{0}'")]
  MissingRegion(Region),
}

impl LayoutError {
  pub fn region_render(region: Region, source: impl Into<BoxError>) -> Self {
    Self::RegionRender { region, source: source.into() }
  }

  /// The region this error is about.
  pub fn region(&self) -> Region {
    match self {
      Self::RegionRender { region, .. } | Self::MissingRegion(region) => *region,
    }
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::RegionRender { .. } => "REGION_RENDER_FAILURE",
      Self::MissingRegion(_) => "MISSING_REGION",
    }
  }
}
