/* src/server/engine/rust/src/locale.rs */

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Locale used when the requested one is empty or malformed.
pub const DEFAULT_LOCALE: &str = "en";

fn language_tag_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Za-z]{1,8}(?:-[A-Za-z0-9]{1,8})*$").unwrap())
}

/// A language tag fit for the `<html lang>` attribute: hyphen-separated,
/// never containing underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
  /// Parse a normalized tag. Underscores are not rewritten here, so
  /// `en_US` is rejected; use [`Locale::normalize`] for raw input.
  pub fn parse(tag: &str) -> Option<Self> {
    let tag = tag.trim();
    if language_tag_re().is_match(tag) { Some(Self(tag.to_string())) } else { None }
  }

  /// Rewrite `_` to `-` and validate. Empty or malformed input yields
  /// `fallback` instead of an error.
  pub fn normalize(raw: &str, fallback: &Locale) -> Self {
    let candidate = raw.trim().replace('_', "-");
    match Self::parse(&candidate) {
      Some(locale) => locale,
      None => {
        if !candidate.is_empty() {
          tracing::debug!(raw, fallback = %fallback, "malformed locale, using fallback");
        }
        fallback.clone()
      }
    }
  }

  /// Primary language subtag: `en-US` -> `en`.
  pub fn language(&self) -> &str {
    self.0.split('-').next().unwrap_or(&self.0)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Default for Locale {
  fn default() -> Self {
    Self(DEFAULT_LOCALE.to_string())
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for Locale {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn norm(raw: &str) -> String {
    Locale::normalize(raw, &Locale::default()).to_string()
  }

  #[test]
  fn underscores_become_hyphens() {
    assert_eq!(norm("en_US"), "en-US");
    assert_eq!(norm("zh_Hant_TW"), "zh-Hant-TW");
  }

  #[test]
  fn already_normalized_passes_through() {
    assert_eq!(norm("fr"), "fr");
    assert_eq!(norm("pt-BR"), "pt-BR");
  }

  #[test]
  fn surrounding_whitespace_trimmed() {
    assert_eq!(norm("  de_DE \n"), "de-DE");
  }

  #[test]
  fn empty_falls_back_to_default() {
    assert_eq!(norm(""), DEFAULT_LOCALE);
    assert_eq!(norm("   "), DEFAULT_LOCALE);
  }

  #[test]
  fn malformed_falls_back_to_default() {
    assert_eq!(norm("en US"), DEFAULT_LOCALE);
    assert_eq!(norm("\"><script>"), DEFAULT_LOCALE);
    assert_eq!(norm("-en"), DEFAULT_LOCALE);
    assert_eq!(norm("en--US"), DEFAULT_LOCALE);
    assert_eq!(norm("toolonglanguage"), DEFAULT_LOCALE);
  }

  #[test]
  fn custom_fallback_used() {
    let fallback = Locale::parse("ja").unwrap();
    assert_eq!(Locale::normalize("", &fallback).as_str(), "ja");
  }

  #[test]
  fn parse_rejects_underscores() {
    assert!(Locale::parse("en_US").is_none());
    assert!(Locale::parse("en-US").is_some());
  }

  #[test]
  fn language_subtag() {
    assert_eq!(Locale::parse("en-US").unwrap().language(), "en");
    assert_eq!(Locale::parse("ja").unwrap().language(), "ja");
  }
}
