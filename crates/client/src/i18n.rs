//! Message catalog lookup.
//!
//! Catalogs live in `locales/*.yml` and are compiled in by the `i18n!` call in
//! the crate root. Unknown locales fall back to English.

use rust_i18n::t;

pub const DEFAULT_LOCALE: &str = "en";

/// Locales with a catalog, paired with their display names.
pub const SUPPORTED_LOCALES: &[(&str, &str)] = &[("en", "English"), ("zh-CN", "简体中文")];

/// Map a BCP 47 tag such as `en-US` or `zh-Hans-CN` onto a supported locale.
pub fn resolve_locale(tag: &str) -> &'static str {
    let tag = tag.trim();
    if let Some((code, _)) = SUPPORTED_LOCALES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(tag))
    {
        return code;
    }
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    if primary.eq_ignore_ascii_case("zh") {
        "zh-CN"
    } else {
        DEFAULT_LOCALE
    }
}

pub fn apply_locale(tag: &str) {
    rust_i18n::set_locale(resolve_locale(tag));
}

/// Translate `key` in the current locale.
pub fn tr(key: &str) -> String {
    t!(key).into_owned()
}

/// Translate `key`, substituting `%{count}`.
pub fn tr_count(key: &str, count: usize) -> String {
    t!(key, count = count).into_owned()
}
