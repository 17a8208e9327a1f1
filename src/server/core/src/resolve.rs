/* src/server/core/src/resolve.rs */

use crate::locale::Locale;

/// Everything a request carries that can influence locale selection.
pub struct ResolveContext<'a> {
  /// Explicit locale from the URL (`?locale=ar` or a path segment).
  pub explicit: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub default_locale: Locale,
}

/// Resolve chain: explicit URL value -> `locale` cookie -> Accept-Language
/// -> default. Values that are not a supported locale tag are skipped, not
/// errors, so a stale cookie can never break a page.
pub fn resolve_locale(ctx: &ResolveContext<'_>) -> Locale {
  if let Some(loc) = ctx.explicit.and_then(Locale::parse) {
    return loc;
  }

  if let Some(header) = ctx.cookie_header {
    if let Some(loc) = parse_cookie_locale(header, "locale") {
      return loc;
    }
  }

  if let Some(header) = ctx.accept_language {
    if let Some(loc) = parse_accept_language(header) {
      return loc;
    }
  }

  ctx.default_locale
}

fn parse_cookie_locale(header: &str, name: &str) -> Option<Locale> {
  for pair in header.split(';') {
    let pair = pair.trim();
    if let Some((k, v)) = pair.split_once('=') {
      if k.trim() == name {
        if let Some(loc) = Locale::parse(v.trim()) {
          return Some(loc);
        }
      }
    }
  }
  None
}

fn parse_accept_language(header: &str) -> Option<Locale> {
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
        if let Ok(v) = val.parse::<f64>() {
          q = v;
        }
      }
    }
    entries.push((lang, q));
  }

  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  for (lang, _) in &entries {
    if let Some(loc) = Locale::parse(lang) {
      return Some(loc);
    }
    // Prefix match: ar-EG -> ar
    if let Some(idx) = lang.find('-') {
      if let Some(loc) = Locale::parse(&lang[..idx]) {
        return Some(loc);
      }
    }
  }

  None
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx<'a>(
    explicit: Option<&'a str>,
    cookie: Option<&'a str>,
    accept_language: Option<&'a str>,
  ) -> ResolveContext<'a> {
    ResolveContext { explicit, cookie_header: cookie, accept_language, default_locale: Locale::En }
  }

  #[test]
  fn explicit_value_wins() {
    assert_eq!(resolve_locale(&ctx(Some("ar"), Some("locale=en"), None)), Locale::Ar);
  }

  #[test]
  fn unknown_explicit_value_falls_through() {
    assert_eq!(resolve_locale(&ctx(Some("fr"), Some("locale=ar"), None)), Locale::Ar);
  }

  #[test]
  fn cookie_used_when_no_explicit() {
    assert_eq!(resolve_locale(&ctx(None, Some("theme=dark; locale=ar"), None)), Locale::Ar);
  }

  #[test]
  fn stale_cookie_skipped() {
    assert_eq!(resolve_locale(&ctx(None, Some("locale=de"), Some("ar"))), Locale::Ar);
  }

  #[test]
  fn accept_language_q_ordering() {
    assert_eq!(resolve_locale(&ctx(None, None, Some("en;q=0.5, ar;q=0.9"))), Locale::Ar);
  }

  #[test]
  fn accept_language_prefix_match() {
    assert_eq!(resolve_locale(&ctx(None, None, Some("ar-EG, fr;q=0.8"))), Locale::Ar);
  }

  #[test]
  fn falls_back_to_default() {
    assert_eq!(resolve_locale(&ctx(None, None, Some("de, fr;q=0.8"))), Locale::En);
    assert_eq!(resolve_locale(&ctx(None, None, None)), Locale::En);
  }
}
