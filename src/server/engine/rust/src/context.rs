/* src/server/engine/rust/src/context.rs */

use crate::locale::Locale;
use crate::markup::Markup;

/// Ordered fragments a page contributes to the content area, rendered in
/// append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStack {
  fragments: Vec<Markup>,
}

impl ContentStack {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, fragment: impl Into<Markup>) -> &mut Self {
    self.fragments.push(fragment.into());
    self
  }

  /// Push plain text, HTML-escaped.
  pub fn push_text(&mut self, text: &str) -> &mut Self {
    self.fragments.push(Markup::text(text));
    self
  }

  pub fn len(&self) -> usize {
    self.fragments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fragments.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Markup> {
    self.fragments.iter()
  }
}

impl<M: Into<Markup>> FromIterator<M> for ContentStack {
  fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
    Self { fragments: iter.into_iter().map(Into::into).collect() }
  }
}

impl<'a> IntoIterator for &'a ContentStack {
  type Item = &'a Markup;
  type IntoIter = std::slice::Iter<'a, Markup>;

  fn into_iter(self) -> Self::IntoIter {
    self.fragments.iter()
  }
}

/// Per-request input to the composer: locale plus content stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
  pub locale: Locale,
  pub content: ContentStack,
}

impl RenderContext {
  /// Normalize `raw_locale` against the built-in default.
  pub fn new(raw_locale: &str, content: ContentStack) -> Self {
    Self::with_fallback(raw_locale, content, &Locale::default())
  }

  pub fn with_fallback(raw_locale: &str, content: ContentStack, fallback: &Locale) -> Self {
    Self { locale: Locale::normalize(raw_locale, fallback), content }
  }
}
