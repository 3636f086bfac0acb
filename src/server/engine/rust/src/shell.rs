/* src/server/engine/rust/src/shell.rs */

use serde::Deserialize;

use crate::markup::escape_html;

/// Static attributes on the `<html>` element. Defaults reproduce the
/// vertical-menu dashboard template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellAttrs {
  pub class: String,
  pub dir: String,
  pub theme: String,
  pub assets_path: String,
  pub template: String,
}

impl Default for ShellAttrs {
  fn default() -> Self {
    Self {
      class: "light-style layout-navbar-fixed layout-menu-fixed".to_string(),
      dir: "ltr".to_string(),
      theme: "theme-default".to_string(),
      assets_path: "../../assets/".to_string(),
      template: "vertical-menu-template".to_string(),
    }
  }
}

impl ShellAttrs {
  /// Open the `<html>` element for `lang`. `lang` must already be a valid
  /// language tag; the other values are escaped.
  pub(crate) fn open_html(&self, lang: &str) -> String {
    format!(
      r#"<html lang="{lang}" class="{}" dir="{}" data-theme="{}" data-assets-path="{}" data-template="{}">"#,
      escape_html(&self.class),
      escape_html(&self.dir),
      escape_html(&self.theme),
      escape_html(&self.assets_path),
      escape_html(&self.template),
    )
  }
}
