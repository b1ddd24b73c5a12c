//! Theme preference resolution and persistence.
//!
//! The preference lives in a `theme` cookie. When no cookie is present the
//! browser's `Sec-CH-Prefers-Color-Scheme` client hint stands in as the
//! ambient platform default, with light as the final fallback. The resolved
//! theme ends up as a `data-theme` attribute on the document root, which the
//! stylesheet keys its palette off.

/// Cookie name carrying the persisted preference.
pub const THEME_COOKIE: &str = "theme";

/// Request header carrying the ambient color-scheme signal.
pub const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Extracts the persisted theme from a `Cookie` request header, if any.
/// Malformed or unrelated cookies are ignored.
pub fn from_cookie_header(header: &str) -> Option<Theme> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == THEME_COOKIE {
            Theme::parse(value.trim())
        } else {
            None
        }
    })
}

/// Ambient platform signal from the color-scheme client hint.
pub fn ambient(hint: Option<&str>) -> Theme {
    match hint.map(str::trim) {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// A stored preference wins; otherwise the ambient signal decides.
pub fn resolve(cookie_header: Option<&str>, hint: Option<&str>) -> Theme {
    cookie_header
        .and_then(from_cookie_header)
        .unwrap_or_else(|| ambient(hint))
}

/// One-year cookie persisting the given preference.
pub fn set_cookie(theme: Theme) -> String {
    format!(
        "{THEME_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax",
        theme.as_str()
    )
}
