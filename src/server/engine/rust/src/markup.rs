/* src/server/engine/rust/src/markup.rs */

use std::fmt;

/// A trusted HTML fragment, embedded verbatim by the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
  pub fn raw(html: impl Into<String>) -> Self {
    Self(html.into())
  }

  /// Escape plain text so it renders literally.
  pub fn text(text: &str) -> Self {
    Self(escape_html(text))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_string(self) -> String {
    self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Display for Markup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<String> for Markup {
  fn from(html: String) -> Self {
    Self(html)
  }
}

impl From<&str> for Markup {
  fn from(html: &str) -> Self {
    Self(html.to_string())
  }
}

impl From<Markup> for String {
  fn from(markup: Markup) -> Self {
    markup.0
  }
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}
