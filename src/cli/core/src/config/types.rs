/* src/cli/core/src/config/types.rs */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;
use vellum_engine::{Locale, Region, ShellAttrs};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VellumConfig {
  #[serde(default)]
  pub layout: LayoutSection,
  #[serde(default)]
  pub partials: PartialsSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub pages: Vec<PageSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
  #[serde(default = "default_locale")]
  pub default_locale: String,
  #[serde(default)]
  pub locales: Vec<String>,
  #[serde(default)]
  pub shell: ShellAttrs,
}

impl Default for LayoutSection {
  fn default() -> Self {
    Self { default_locale: default_locale(), locales: Vec::new(), shell: ShellAttrs::default() }
  }
}

impl LayoutSection {
  pub fn validate(&self) -> Result<()> {
    let Some(default) = Locale::parse(&self.default_locale) else {
      bail!("layout.default_locale \"{}\" is not a valid language tag", self.default_locale);
    };
    let locales = self.parsed_locales()?;
    if !locales.is_empty() && !locales.contains(&default) {
      bail!(
        "layout.default_locale \"{}\" is not in layout.locales {:?}",
        self.default_locale,
        self.locales
      );
    }
    Ok(())
  }

  pub fn default_locale(&self) -> Result<Locale> {
    match Locale::parse(&self.default_locale) {
      Some(locale) => Ok(locale),
      None => {
        bail!("layout.default_locale \"{}\" is not a valid language tag", self.default_locale)
      }
    }
  }

  pub fn parsed_locales(&self) -> Result<Vec<Locale>> {
    self
      .locales
      .iter()
      .map(|raw| match Locale::parse(raw) {
        Some(locale) => Ok(locale),
        None => bail!("layout.locales entry \"{raw}\" is not a valid language tag"),
      })
      .collect()
  }
}

fn default_locale() -> String {
  vellum_engine::DEFAULT_LOCALE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartialsSection {
  #[serde(default = "default_partials_dir")]
  pub dir: String,
  #[serde(default = "default_head")]
  pub head: String,
  #[serde(default = "default_sidebar")]
  pub sidebar: String,
  #[serde(default = "default_navbar")]
  pub navbar: String,
  #[serde(default = "default_footer")]
  pub footer: String,
  #[serde(default = "default_scripts")]
  pub scripts: String,
}

impl Default for PartialsSection {
  fn default() -> Self {
    Self {
      dir: default_partials_dir(),
      head: default_head(),
      sidebar: default_sidebar(),
      navbar: default_navbar(),
      footer: default_footer(),
      scripts: default_scripts(),
    }
  }
}

impl PartialsSection {
  pub fn file_name(&self, region: Region) -> &str {
    match region {
      Region::Head => &self.head,
      Region::Sidebar => &self.sidebar,
      Region::Navbar => &self.navbar,
      Region::Footer => &self.footer,
      Region::Scripts => &self.scripts,
    }
  }

  /// Partial file for `region`, relative to the config directory.
  pub fn path(&self, base_dir: &Path, region: Region) -> PathBuf {
    base_dir.join(&self.dir).join(self.file_name(region))
  }
}

fn default_partials_dir() -> String {
  "components".to_string()
}

fn default_head() -> String {
  "head.html".to_string()
}

fn default_sidebar() -> String {
  "sidebar.html".to_string()
}

fn default_navbar() -> String {
  "navbar.html".to_string()
}

fn default_footer() -> String {
  "footer.html".to_string()
}

fn default_scripts() -> String {
  "scripts.html".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port() }
  }
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
  pub route: String,
  /// Content fragment files, pushed onto the content stack in order.
  #[serde(default)]
  pub content: Vec<String>,
}

impl VellumConfig {
  pub fn validate(&self) -> Result<()> {
    self.layout.validate()?;
    let mut seen = HashSet::new();
    for page in &self.pages {
      if !page.route.starts_with('/') {
        bail!("pages.route \"{}\" must start with '/'", page.route);
      }
      if page.route.starts_with("/_vellum") {
        bail!("pages.route \"{}\" collides with the reserved /_vellum prefix", page.route);
      }
      // Page content is fixed per route, so only static paths are allowed.
      let dynamic = page.route.split('/').any(|seg| {
        seg.starts_with(':') || seg.starts_with('*') || seg.contains(['{', '}'])
      });
      if dynamic {
        bail!(
          "pages.route \"{}\" must be a static path (no parameters or wildcards)",
          page.route
        );
      }
      if !seen.insert(page.route.as_str()) {
        bail!("pages.route \"{}\" is declared more than once", page.route);
      }
    }
    Ok(())
  }
}
