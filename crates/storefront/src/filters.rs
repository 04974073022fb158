//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the URL of the fingerprinted stylesheet.
///
/// Falls back to the plain `main.css` when the build script could not hash it.
///
/// Usage in templates: `{{ ""|stylesheet_href }}`
#[askama::filter_fn]
pub fn stylesheet_href(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(stylesheet_path(env!("CSS_HASH")))
}

fn stylesheet_path(hash: &str) -> String {
    if hash.is_empty() {
        "/static/css/main.css".to_string()
    } else {
        format!("/static/css/derived/main.{hash}.css")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_path() {
        assert_eq!(stylesheet_path(""), "/static/css/main.css");
        assert_eq!(
            stylesheet_path("1a2b3c4d"),
            "/static/css/derived/main.1a2b3c4d.css"
        );
    }
}
