/* src/server/engine/rust/src/region.rs */

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::errors::{BoxError, LayoutError};
use crate::markup::Markup;

/// Independently maintained parts of the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
  Head,
  Sidebar,
  Navbar,
  Footer,
  Scripts,
}

impl Region {
  /// Invocation order used by the composer.
  pub const ALL: [Region; 5] =
    [Region::Head, Region::Sidebar, Region::Navbar, Region::Footer, Region::Scripts];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Head => "head",
      Self::Sidebar => "sidebar",
      Self::Navbar => "navbar",
      Self::Footer => "footer",
      Self::Scripts => "scripts",
    }
  }
}

impl fmt::Display for Region {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Produces the markup for one region from the current render context.
pub trait RegionRenderer: Send + Sync {
  fn render(&self, ctx: &RenderContext) -> Result<Markup, BoxError>;
}

impl<F> RegionRenderer for F
where
  F: Fn(&RenderContext) -> Result<Markup, BoxError> + Send + Sync,
{
  fn render(&self, ctx: &RenderContext) -> Result<Markup, BoxError> {
    self(ctx)
  }
}

/// A region whose markup never changes.
#[derive(Debug, Clone)]
pub struct StaticRegion(Markup);

impl StaticRegion {
  pub fn new(markup: impl Into<Markup>) -> Self {
    Self(markup.into())
  }
}

impl RegionRenderer for StaticRegion {
  fn render(&self, _ctx: &RenderContext) -> Result<Markup, BoxError> {
    Ok(self.0.clone())
  }
}

pub type SharedRenderer = Arc<dyn RegionRenderer>;

/// The full set of region renderers handed to the composer.
#[derive(Clone)]
pub struct Regions {
  head: SharedRenderer,
  sidebar: SharedRenderer,
  navbar: SharedRenderer,
  footer: SharedRenderer,
  scripts: SharedRenderer,
}

impl Regions {
  pub fn new(
    head: SharedRenderer,
    sidebar: SharedRenderer,
    navbar: SharedRenderer,
    footer: SharedRenderer,
    scripts: SharedRenderer,
  ) -> Self {
    Self { head, sidebar, navbar, footer, scripts }
  }

  pub fn builder() -> RegionsBuilder {
    RegionsBuilder::default()
  }

  pub fn get(&self, region: Region) -> &dyn RegionRenderer {
    match region {
      Region::Head => self.head.as_ref(),
      Region::Sidebar => self.sidebar.as_ref(),
      Region::Navbar => self.navbar.as_ref(),
      Region::Footer => self.footer.as_ref(),
      Region::Scripts => self.scripts.as_ref(),
    }
  }
}

impl fmt::Debug for Regions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Regions").finish_non_exhaustive()
  }
}

#[derive(Default)]
pub struct RegionsBuilder {
  head: Option<SharedRenderer>,
  sidebar: Option<SharedRenderer>,
  navbar: Option<SharedRenderer>,
  footer: Option<SharedRenderer>,
  scripts: Option<SharedRenderer>,
}

impl RegionsBuilder {
  pub fn region(mut self, region: Region, renderer: impl RegionRenderer + 'static) -> Self {
    let slot = match region {
      Region::Head => &mut self.head,
      Region::Sidebar => &mut self.sidebar,
      Region::Navbar => &mut self.navbar,
      Region::Footer => &mut self.footer,
      Region::Scripts => &mut self.scripts,
    };
    let shared: SharedRenderer = Arc::new(renderer);
    *slot = Some(shared);
    self
  }

  pub fn head(self, renderer: impl RegionRenderer + 'static) -> Self {
    self.region(Region::Head, renderer)
  }

  pub fn sidebar(self, renderer: impl RegionRenderer + 'static) -> Self {
    self.region(Region::Sidebar, renderer)
  }

  pub fn navbar(self, renderer: impl RegionRenderer + 'static) -> Self {
    self.region(Region::Navbar, renderer)
  }

  pub fn footer(self, renderer: impl RegionRenderer + 'static) -> Self {
    self.region(Region::Footer, renderer)
  }

  pub fn scripts(self, renderer: impl RegionRenderer + 'static) -> Self {
    self.region(Region::Scripts, renderer)
  }

  /// Fails with the first unset region in invocation order.
  pub fn build(self) -> Result<Regions, LayoutError> {
    Ok(Regions {
      head: self.head.ok_or(LayoutError::MissingRegion(Region::Head))?,
      sidebar: self.sidebar.ok_or(LayoutError::MissingRegion(Region::Sidebar))?,
      navbar: self.navbar.ok_or(LayoutError::MissingRegion(Region::Navbar))?,
      footer: self.footer.ok_or(LayoutError::MissingRegion(Region::Footer))?,
      scripts: self.scripts.ok_or(LayoutError::MissingRegion(Region::Scripts))?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::context::ContentStack;

  #[test]
  fn region_names() {
    let names: Vec<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
    assert_eq!(names, vec!["head", "sidebar", "navbar", "footer", "scripts"]);
  }

  #[test]
  fn region_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Region::Navbar).unwrap(), r#""navbar""#);
  }

  #[test]
  fn closure_renderer_sees_context() {
    let renderer = |ctx: &RenderContext| -> Result<Markup, BoxError> {
      Ok(Markup::raw(format!("<nav data-locale=\"{}\"></nav>", ctx.locale)))
    };
    let ctx = RenderContext::new("fr_CA", ContentStack::new());
    assert_eq!(renderer.render(&ctx).unwrap().as_str(), r#"<nav data-locale="fr-CA"></nav>"#);
  }

  #[test]
  fn builder_reports_first_missing_region() {
    let err = Regions::builder()
      .head(StaticRegion::new("<head></head>"))
      .navbar(StaticRegion::new("<nav></nav>"))
      .build()
      .unwrap_err();
    assert_eq!(err.region(), Region::Sidebar);
  }

  #[test]
  fn builder_complete() {
    let regions = Regions::builder()
      .head(StaticRegion::new("h"))
      .sidebar(StaticRegion::new("s"))
      .navbar(StaticRegion::new("n"))
      .footer(StaticRegion::new("f"))
      .scripts(StaticRegion::new("x"))
      .build()
      .unwrap();
    let ctx = RenderContext::default();
    assert_eq!(regions.get(Region::Footer).render(&ctx).unwrap().as_str(), "f");
  }
}
