/* src/server/adapter/axum/src/resolve.rs */

use vellum_engine::Locale;

/// Cookie holding the user's chosen locale.
pub const LOCALE_COOKIE: &str = "locale";

pub struct ResolveContext<'a> {
  pub query_locale: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  /// Supported locales. Empty means any well-formed tag is accepted.
  pub locales: &'a [Locale],
  pub default_locale: &'a Locale,
}

/// Resolve chain: `?lang=` -> `locale` cookie -> Accept-Language -> default.
pub fn resolve_locale(ctx: &ResolveContext<'_>) -> Locale {
  if let Some(loc) = ctx.query_locale.and_then(|raw| accept(raw, ctx.locales)) {
    return loc;
  }

  if let Some(loc) =
    ctx.cookie_header.and_then(|header| parse_cookie_locale(header, LOCALE_COOKIE, ctx.locales))
  {
    return loc;
  }

  if let Some(loc) =
    ctx.accept_language.and_then(|header| parse_accept_language(header, ctx.locales))
  {
    return loc;
  }

  ctx.default_locale.clone()
}

/// Normalize a raw value and check it against the supported set.
fn accept(raw: &str, locales: &[Locale]) -> Option<Locale> {
  let locale = Locale::parse(&raw.trim().replace('_', "-"))?;
  if locales.is_empty() || locales.contains(&locale) { Some(locale) } else { None }
}

fn parse_cookie_locale(header: &str, name: &str, locales: &[Locale]) -> Option<Locale> {
  for pair in header.split(';') {
    let pair = pair.trim();
    if let Some((k, v)) = pair.split_once('=') {
      if k.trim() == name {
        if let Some(loc) = accept(v, locales) {
          return Some(loc);
        }
      }
    }
  }
  None
}

fn parse_accept_language(header: &str, locales: &[Locale]) -> Option<Locale> {
  if header.is_empty() {
    return None;
  }

  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      let s = s.trim();
      if let Some(val) = s.strip_prefix("q=") {
        // Unparsable weights become 0 so the entry is dropped below.
        q = val.parse::<f64>().unwrap_or(0.0);
      }
    }
    // q=0 means "not acceptable"; NaN or out-of-range weights are malformed.
    if !q.is_finite() || q <= 0.0 || q > 1.0 {
      continue;
    }
    entries.push((lang, q));
  }

  // Stable, so equal weights keep header order.
  entries.sort_by(|a, b| b.1.total_cmp(&a.1));

  for (lang, _) in &entries {
    if *lang == "*" {
      continue;
    }
    if let Some(loc) = accept(lang, locales) {
      return Some(loc);
    }
    // Prefix match: en-US -> en
    if let Some(idx) = lang.find('-') {
      if let Some(loc) = accept(&lang[..idx], locales) {
        return Some(loc);
      }
    }
  }

  None
}
