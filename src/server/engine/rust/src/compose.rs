/* src/server/engine/rust/src/compose.rs */

use crate::context::{ContentStack, RenderContext};
use crate::errors::LayoutError;
use crate::locale::Locale;
use crate::markup::Markup;
use crate::region::{Region, Regions};
use crate::shell::ShellAttrs;

/// Region output collected before assembly, so a failing renderer never
/// leaves a half-written document behind.
struct RenderedRegions {
  head: Markup,
  sidebar: Markup,
  navbar: Markup,
  footer: Markup,
  scripts: Markup,
}

/// Composes the dashboard page shell around a page's content stack.
#[derive(Debug, Clone)]
pub struct PageComposer {
  regions: Regions,
  attrs: ShellAttrs,
  default_locale: Locale,
}

impl PageComposer {
  pub fn new(regions: Regions) -> Self {
    Self { regions, attrs: ShellAttrs::default(), default_locale: Locale::default() }
  }

  pub fn with_attrs(mut self, attrs: ShellAttrs) -> Self {
    self.attrs = attrs;
    self
  }

  pub fn with_default_locale(mut self, locale: Locale) -> Self {
    self.default_locale = locale;
    self
  }

  pub fn default_locale(&self) -> &Locale {
    &self.default_locale
  }

  pub fn attrs(&self) -> &ShellAttrs {
    &self.attrs
  }

  /// Render a full document from a raw locale and content fragments.
  /// Empty or malformed locales fall back to the composer's default.
  pub fn render<I, M>(&self, locale: &str, fragments: I) -> Result<Markup, LayoutError>
  where
    I: IntoIterator<Item = M>,
    M: Into<Markup>,
  {
    let content: ContentStack = fragments.into_iter().collect();
    let ctx = RenderContext::with_fallback(locale, content, &self.default_locale);
    self.compose(&ctx)
  }

  /// Invoke each region renderer once, in [`Region::ALL`] order, then
  /// assemble the document.
  pub fn compose(&self, ctx: &RenderContext) -> Result<Markup, LayoutError> {
    let rendered = RenderedRegions {
      head: self.render_region(Region::Head, ctx)?,
      sidebar: self.render_region(Region::Sidebar, ctx)?,
      navbar: self.render_region(Region::Navbar, ctx)?,
      footer: self.render_region(Region::Footer, ctx)?,
      scripts: self.render_region(Region::Scripts, ctx)?,
    };
    Ok(self.assemble(ctx, &rendered))
  }

  fn render_region(&self, region: Region, ctx: &RenderContext) -> Result<Markup, LayoutError> {
    tracing::debug!(%region, locale = %ctx.locale, "rendering region");
    self.regions.get(region).render(ctx).map_err(|source| {
      tracing::warn!(%region, error = %source, "region render failed");
      LayoutError::RegionRender { region, source }
    })
  }

  fn assemble(&self, ctx: &RenderContext, r: &RenderedRegions) -> Markup {
    let content_len: usize = ctx.content.iter().map(|m| m.as_str().len() + 1).sum();
    let mut html = String::with_capacity(
      SKELETON_CAPACITY
        + content_len
        + r.head.as_str().len()
        + r.sidebar.as_str().len()
        + r.navbar.as_str().len()
        + r.footer.as_str().len()
        + r.scripts.as_str().len(),
    );

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&self.attrs.open_html(ctx.locale.as_str()));
    html.push('\n');
    push_line(&mut html, r.head.as_str());
    html.push_str("<body>\n");
    html.push_str("<div class=\"layout-wrapper layout-content-navbar\">\n");
    html.push_str("<div class=\"layout-container\">\n");
    push_line(&mut html, r.sidebar.as_str());
    html.push_str("<div class=\"layout-page\">\n");
    push_line(&mut html, r.navbar.as_str());
    html.push_str("<div class=\"content-wrapper\">\n");
    for fragment in &ctx.content {
      push_line(&mut html, fragment.as_str());
    }
    push_line(&mut html, r.footer.as_str());
    html.push_str("<div class=\"content-backdrop fade\"></div>\n");
    html.push_str("</div>\n"); // content-wrapper
    html.push_str("</div>\n"); // layout-page
    html.push_str("</div>\n"); // layout-container
    html.push_str("<div class=\"layout-overlay layout-menu-toggle\"></div>\n");
    html.push_str("<div class=\"drag-target\"></div>\n");
    html.push_str("</div>\n"); // layout-wrapper
    push_line(&mut html, r.scripts.as_str());
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    Markup::raw(html)
  }
}

const SKELETON_CAPACITY: usize = 640;

fn push_line(html: &mut String, fragment: &str) {
  html.push_str(fragment);
  if !fragment.is_empty() && !fragment.ends_with('\n') {
    html.push('\n');
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;

  use super::*;
  use crate::errors::BoxError;
  use crate::region::{RegionRenderer, StaticRegion};

  fn stub_regions() -> Regions {
    Regions::builder()
      .head(StaticRegion::new("<head><title>Admin</title></head>"))
      .sidebar(StaticRegion::new("<aside id=\"layout-menu\"></aside>"))
      .navbar(StaticRegion::new("<nav id=\"layout-navbar\"></nav>"))
      .footer(StaticRegion::new("<footer class=\"content-footer\"></footer>"))
      .scripts(StaticRegion::new("<script src=\"main.js\"></script>"))
      .build()
      .unwrap()
  }

  fn composer() -> PageComposer {
    PageComposer::new(stub_regions())
  }

  fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
  }

  fn pos(haystack: &str, needle: &str) -> usize {
    haystack.find(needle).unwrap_or_else(|| panic!("missing {needle}"))
  }

  #[test]
  fn hello_scenario() {
    let html = composer().render("en_US", ["<p>Hello</p>"]).unwrap();
    let html = html.as_str();
    assert!(html.contains(r#"lang="en-US""#));
    let wrapper = pos(html, r#"<div class="content-wrapper">"#);
    let hello = pos(html, "<p>Hello</p>");
    let footer = pos(html, "<footer");
    assert!(wrapper < hello && hello < footer);
  }

  #[test]
  fn empty_locale_uses_default() {
    let html = composer().render("", Vec::<String>::new()).unwrap();
    assert!(html.as_str().contains(r#"<html lang="en" "#));
  }

  #[test]
  fn configured_default_locale() {
    let c = composer().with_default_locale(Locale::parse("de").unwrap());
    let html = c.render("???", ["x"]).unwrap();
    assert!(html.as_str().contains(r#"lang="de""#));
  }

  #[test]
  fn empty_content_keeps_wrapper() {
    let html = composer().render("en", Vec::<Markup>::new()).unwrap();
    let html = html.as_str();
    assert_eq!(count(html, r#"<div class="content-wrapper">"#), 1);
    let wrapper = pos(html, r#"<div class="content-wrapper">"#);
    assert!(wrapper < pos(html, "<footer"));
  }

  #[test]
  fn fragments_keep_supplied_order() {
    let fragments = ["<h4>One</h4>", "<div>Two</div>", "<p>Three</p>"];
    let html = composer().render("en", fragments).unwrap();
    let html = html.as_str();
    let wrapper = pos(html, r#"<div class="content-wrapper">"#);
    let one = pos(html, "<h4>One</h4>");
    let two = pos(html, "<div>Two</div>");
    let three = pos(html, "<p>Three</p>");
    let backdrop = pos(html, "content-backdrop");
    assert!(wrapper < one && one < two && two < three && three < backdrop);
  }

  #[test]
  fn regions_appear_once_in_fixed_order() {
    let html = composer().render("en", ["<p>c</p>"]).unwrap();
    let html = html.as_str();
    let markers = [
      "<head><title>Admin</title></head>",
      "<aside id=\"layout-menu\"></aside>",
      "<nav id=\"layout-navbar\"></nav>",
      "<div class=\"content-wrapper\">",
      "<footer class=\"content-footer\"></footer>",
      "<script src=\"main.js\"></script>",
    ];
    let mut last = 0;
    for marker in markers {
      assert_eq!(count(html, marker), 1, "{marker} should appear once");
      let at = pos(html, marker);
      assert!(at >= last, "{marker} out of order");
      last = at;
    }
  }

  #[test]
  fn full_document_skeleton() {
    let html = composer().render("en_US", ["<p>Hello</p>"]).unwrap();
    let expected = concat!(
      "<!DOCTYPE html>\n",
      r#"<html lang="en-US" class="light-style layout-navbar-fixed layout-menu-fixed" dir="ltr" data-theme="theme-default" data-assets-path="../../assets/" data-template="vertical-menu-template">"#,
      "\n",
      "<head><title>Admin</title></head>\n",
      "<body>\n",
      "<div class=\"layout-wrapper layout-content-navbar\">\n",
      "<div class=\"layout-container\">\n",
      "<aside id=\"layout-menu\"></aside>\n",
      "<div class=\"layout-page\">\n",
      "<nav id=\"layout-navbar\"></nav>\n",
      "<div class=\"content-wrapper\">\n",
      "<p>Hello</p>\n",
      "<footer class=\"content-footer\"></footer>\n",
      "<div class=\"content-backdrop fade\"></div>\n",
      "</div>\n",
      "</div>\n",
      "</div>\n",
      "<div class=\"layout-overlay layout-menu-toggle\"></div>\n",
      "<div class=\"drag-target\"></div>\n",
      "</div>\n",
      "<script src=\"main.js\"></script>\n",
      "</body>\n",
      "</html>\n",
    );
    assert_eq!(html.as_str(), expected);
  }

  #[test]
  fn rendering_is_idempotent() {
    let c = composer();
    let a = c.render("pt_BR", ["<p>a</p>", "<p>b</p>"]).unwrap();
    let b = c.render("pt_BR", ["<p>a</p>", "<p>b</p>"]).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn failing_sidebar_names_region() {
    let regions = Regions::builder()
      .head(StaticRegion::new("<head></head>"))
      .sidebar(|_: &RenderContext| -> Result<Markup, BoxError> { Err("menu data missing".into()) })
      .navbar(StaticRegion::new("<nav></nav>"))
      .footer(StaticRegion::new("<footer></footer>"))
      .scripts(StaticRegion::new(""))
      .build()
      .unwrap();
    let err = PageComposer::new(regions).render("en", ["<p>x</p>"]).unwrap_err();
    assert_eq!(err.region(), Region::Sidebar);
    assert!(matches!(err, LayoutError::RegionRender { region: Region::Sidebar, .. }));
  }

  struct Counting {
    calls: Arc<AtomicUsize>,
    markup: &'static str,
  }

  impl RegionRenderer for Counting {
    fn render(&self, _ctx: &RenderContext) -> Result<Markup, BoxError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      Ok(Markup::raw(self.markup))
    }
  }

  #[test]
  fn each_region_invoked_exactly_once() {
    let calls: Vec<Arc<AtomicUsize>> = (0..5).map(|_| Arc::new(AtomicUsize::new(0))).collect();
    let mut builder = Regions::builder();
    for (region, counter) in Region::ALL.into_iter().zip(&calls) {
      builder = builder.region(region, Counting { calls: counter.clone(), markup: "<i></i>" });
    }
    let c = PageComposer::new(builder.build().unwrap());
    c.render("en", ["a", "b"]).unwrap();
    for counter in &calls {
      assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
  }

  #[test]
  fn failure_stops_before_later_regions() {
    let scripts_calls = Arc::new(AtomicUsize::new(0));
    let regions = Regions::builder()
      .head(StaticRegion::new("<head></head>"))
      .sidebar(StaticRegion::new("<aside></aside>"))
      .navbar(StaticRegion::new("<nav></nav>"))
      .footer(|_: &RenderContext| -> Result<Markup, BoxError> { Err("boom".into()) })
      .scripts(Counting { calls: scripts_calls.clone(), markup: "<script></script>" })
      .build()
      .unwrap();
    let err = PageComposer::new(regions).render("en", Vec::<Markup>::new()).unwrap_err();
    assert_eq!(err.region(), Region::Footer);
    assert_eq!(scripts_calls.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn custom_attrs_applied() {
    let attrs = ShellAttrs { theme: "theme-bordered".to_string(), ..ShellAttrs::default() };
    let html = composer().with_attrs(attrs).render("en", ["x"]).unwrap();
    assert!(html.as_str().contains(r#"data-theme="theme-bordered""#));
  }
}
