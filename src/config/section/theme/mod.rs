//! `[theme]` section configuration.
//!
//! Presentation settings handed to the page shell: navbar, footer and
//! color mode.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "Raven Thunder"
//! logo = { alt = "Thunder Logo", src = "img/logo.svg" }
//!
//! [[theme.navbar.items]]
//! type = "doc_sidebar"
//! sidebar_id = "docs"
//! label = "Docs"
//!
//! [[theme.navbar.items]]
//! type = "link"
//! label = "GitHub"
//! href = "https://github.com/dream-horizon-org/thunder"
//! position = "right"
//!
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © Thunder."
//!
//! [[theme.footer.links]]
//! title = "Documentation"
//! items = [{ label = "Getting Started", to = "/raven-thunder/getting-started/overview" }]
//!
//! [theme.color_mode]
//! default_mode = "light"
//! respect_prefers_color_scheme = true
//! ```

mod color_mode;
mod footer;
mod navbar;

pub use color_mode::{ColorMode, ColorModeConfig};
pub use footer::{FooterConfig, FooterGroup, FooterLink, FooterStyle};
pub use navbar::{DocSidebarItem, Logo, NavbarConfig, NavbarItem, NavbarLink, Position};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation bar.
    pub navbar: NavbarConfig,

    /// Footer link groups and copyright.
    pub footer: FooterConfig,

    /// Light/dark mode policy.
    pub color_mode: ColorModeConfig,
}

impl ThemeConfig {
    /// Validate navbar and footer entries.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.navbar.validate(diag);
        self.footer.validate(diag);
    }

    /// Every internal/external link target in navbar and footer, with the
    /// config path it came from.
    pub fn targets(&self) -> Vec<(FieldPath, Target<'_>)> {
        let mut targets = self.navbar.targets();
        targets.extend(self.footer.targets());
        targets
    }
}

// ============================================================================
// Link targets
// ============================================================================

/// Where a configured link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Site path, written with `to` (e.g., "/raven-thunder/api/overview").
    Internal(&'a str),
    /// Absolute URL, written with `href`.
    External(&'a str),
}

impl<'a> Target<'a> {
    /// Build from the `to`/`href` field pair. `to` wins if both are set;
    /// validation reports that case separately.
    pub fn from_fields(to: Option<&'a str>, href: Option<&'a str>) -> Option<Self> {
        match (to, href) {
            (Some(to), _) => Some(Self::Internal(to)),
            (None, Some(href)) => Some(Self::External(href)),
            (None, None) => None,
        }
    }

    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Internal(s) | Self::External(s) => s,
        }
    }
}

/// Validate a `to`/`href` pair found at `field`.
///
/// Exactly one must be set; `to` must be an absolute site path and `href`
/// an absolute http(s) or mailto URL.
pub(crate) fn validate_target(
    to: Option<&str>,
    href: Option<&str>,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    match (to, href) {
        (Some(_), Some(_)) => diag.error_with_hint(
            field.clone(),
            "both `to` and `href` are set",
            "use `to` for site paths and `href` for external URLs",
        ),
        (None, None) => diag.error(field.clone(), "link needs either `to` or `href`"),
        (Some(to), None) => {
            if !to.starts_with('/') || to.starts_with("//") || to.chars().any(char::is_whitespace)
            {
                diag.error_with_hint(
                    field.child("to"),
                    format!("`{to}` is not an absolute site path"),
                    "internal links start with `/`; use `href` for external URLs",
                );
            }
        }
        (None, Some(href)) => validate_external(href, field.child("href"), diag),
    }
}

/// Validate an absolute http(s) or mailto URL found at `field`.
pub(crate) fn validate_external(href: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(href) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            if parsed.host_str().is_none() {
                diag.error(field, format!("`{href}` has no host"));
            }
        }
        Ok(parsed) if parsed.scheme() == "mailto" => {}
        Ok(parsed) => diag.error(
            field,
            format!("scheme '{}' not supported in `{href}`", parsed.scheme()),
        ),
        Err(e) => diag.error_with_hint(
            field,
            format!("invalid URL `{href}`: {e}"),
            "use an absolute URL like https://example.com",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(to: Option<&str>, href: Option<&str>) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        validate_target(to, href, &FieldPath::new("theme.test"), &mut diag);
        diag
    }

    #[test]
    fn test_valid_targets() {
        assert!(check(Some("/raven-thunder/api/overview"), None).is_empty());
        assert!(check(None, Some("https://github.com/dream-horizon-org/thunder")).is_empty());
        assert!(check(None, Some("mailto:team@example.com")).is_empty());
    }

    #[test]
    fn test_invalid_targets() {
        assert_eq!(check(None, None).len(), 1);
        assert_eq!(check(Some("/a"), Some("https://a.com")).len(), 1);
        assert_eq!(check(Some("api/overview"), None).len(), 1);
        assert_eq!(check(Some("//cdn.example.com/x"), None).len(), 1);
        assert_eq!(check(None, Some("/not-a-url")).len(), 1);
        assert_eq!(check(None, Some("ftp://files.example.com")).len(), 1);
    }

    #[test]
    fn test_target_from_fields() {
        assert_eq!(Target::from_fields(Some("/a"), None), Some(Target::Internal("/a")));
        assert_eq!(
            Target::from_fields(None, Some("https://a.com")),
            Some(Target::External("https://a.com"))
        );
        assert_eq!(Target::from_fields(None, None), None);
    }
}
