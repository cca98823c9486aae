//! `[site]` section configuration.
//!
//! Site identity and build-wide policies.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Raven Thunder"
//! tagline = "CTAs, Nudges and Behaviour Tags platform"
//! url = "https://dream-horizon-org.github.io"
//! base_url = "/raven-thunder/"
//! favicon = "img/logo.svg"
//! organization_name = "dream-horizon-org"
//! project_name = "thunder"
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//! trailing_slash = false
//!
//! [site.i18n]
//! default_locale = "en"
//! locales = ["en"]
//! ```

mod i18n;
mod policy;

pub use i18n::I18nConfig;
pub use policy::BrokenLinkPolicy;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};

/// Top-level identity and build configuration for the documentation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Site title, shown in the browser tab and the navbar.
    pub title: String,

    /// One-line description shown under the title.
    pub tagline: String,

    /// Deployment origin without path (e.g., "https://example.github.io").
    pub url: Option<String>,

    /// Path prefix the site is served under (e.g., "/raven-thunder/").
    pub base_url: String,

    /// Favicon path, relative to `base_url`.
    pub favicon: Option<String>,

    /// GitHub organization (or user) owning the repository.
    pub organization_name: String,

    /// GitHub repository name.
    pub project_name: String,

    /// Locale settings.
    pub i18n: I18nConfig,

    /// Reaction to broken links in navbar, footer and landing page.
    pub on_broken_links: BrokenLinkPolicy,

    /// Reaction to broken relative links between Markdown documents.
    pub on_broken_markdown_links: BrokenLinkPolicy,

    /// Force (`true`) or strip (`false`) trailing slashes on routes.
    /// Unset keeps routes as produced.
    pub trailing_slash: Option<bool>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            favicon: None,
            organization_name: String::new(),
            project_name: String::new(),
            i18n: I18nConfig::default(),
            on_broken_links: BrokenLinkPolicy::Throw,
            on_broken_markdown_links: BrokenLinkPolicy::Warn,
            trailing_slash: None,
        }
    }
}

impl SiteSettings {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const BASE_URL: FieldPath = FieldPath::new("site.base_url");
    pub const FAVICON: FieldPath = FieldPath::new("site.favicon");

    /// Validate the settings and hand them back unchanged.
    ///
    /// Every violation is collected into one [`ConfigError::Diagnostics`].
    pub fn resolve(self) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok(self)
    }

    /// Validate site settings.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `base_url` is a well-formed absolute path prefix
    /// - `url`, when set, is an http(s) origin without path
    /// - `favicon` is relative to `base_url`
    /// - locale settings (see [`I18nConfig::validate`])
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "site title must not be empty");
        }

        if let Err(message) = check_base_url(&self.base_url) {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("`{}` {}", self.base_url, message),
                "use an absolute path prefix like \"/\" or \"/my-project/\"",
            );
        }

        if let Some(url) = &self.url {
            self.validate_url(url, diag);
        }

        if let Some(favicon) = &self.favicon
            && (favicon.starts_with('/') || favicon.contains("://"))
        {
            diag.error_with_hint(
                Self::FAVICON,
                format!("`{favicon}` must be relative to {}", Self::BASE_URL),
                "use a path like \"img/logo.svg\"",
            );
        }

        self.i18n.validate(diag);
    }

    fn validate_url(&self, url_str: &str, diag: &mut ConfigDiagnostics) {
        let parsed = match url::Url::parse(url_str) {
            Ok(parsed) => parsed,
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
                return;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            diag.error_with_hint(
                Self::URL,
                format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ),
                "use format like https://example.com",
            );
        }
        if parsed.host_str().is_none() {
            diag.error_with_hint(
                Self::URL,
                "URL must have a valid host",
                "use format like https://example.com",
            );
        }
        if parsed.path() != "/" {
            diag.error_with_hint(
                Self::URL,
                format!("URL must not contain a path, found `{}`", parsed.path()),
                format!("move the path into {}", Self::BASE_URL),
            );
        }
    }

    /// Repository URL derived from organization and project names.
    pub fn repository_url(&self) -> Option<String> {
        if self.organization_name.is_empty() || self.project_name.is_empty() {
            return None;
        }
        Some(format!(
            "https://github.com/{}/{}",
            self.organization_name, self.project_name
        ))
    }
}

/// Check that `base` is an absolute path prefix such as `/` or `/a/b/`.
///
/// Returns the reason on failure.
fn check_base_url(base: &str) -> Result<(), &'static str> {
    if base.is_empty() {
        return Err("must not be empty");
    }
    if !base.starts_with('/') {
        return Err("must start with `/`");
    }
    if !base.ends_with('/') {
        return Err("must end with `/`");
    }
    if base.contains(['?', '#']) {
        return Err("must not contain a query or fragment");
    }
    if base.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    if base.len() > 1 {
        let inner = &base[1..base.len() - 1];
        if inner.split('/').any(str::is_empty) {
            return Err("must not contain empty path segments");
        }
        if inner.split('/').any(|seg| seg == "." || seg == "..") {
            return Err("must not contain `.` or `..` segments");
        }
    }

    // Anything the URL parser would rewrite (percent-encoding, backslashes)
    // cannot be used verbatim as a link prefix.
    let probe = url::Url::parse("http://localhost")
        .and_then(|origin| origin.join(base))
        .map_err(|_| "is not a valid URL path")?;
    if probe.path() != base {
        return Err("contains characters that must be percent-encoded");
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn thunder(locales: &[&str]) -> SiteSettings {
        SiteSettings {
            title: "Thunder".into(),
            base_url: "/thunder/".into(),
            i18n: I18nConfig {
                default_locale: "en".into(),
                locales: locales.iter().map(|l| l.to_string()).collect(),
            },
            on_broken_links: BrokenLinkPolicy::Throw,
            ..SiteSettings::default()
        }
    }

    #[test]
    fn test_resolve_returns_settings_unchanged() {
        let settings = thunder(&["en"]);
        let resolved = settings.clone().resolve().unwrap();
        assert_eq!(resolved, settings);
    }

    #[test]
    fn test_resolve_empty_locales_fails() {
        let err = thunder(&[]).resolve().unwrap_err();
        let ConfigError::Diagnostics(diag) = &err else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, I18nConfig::LOCALES);
        assert!(err.to_string().contains("locale list is empty"));
    }

    #[test]
    fn test_base_url_shapes() {
        assert!(check_base_url("/").is_ok());
        assert!(check_base_url("/raven-thunder/").is_ok());
        assert!(check_base_url("/a/b/").is_ok());

        assert_eq!(check_base_url(""), Err("must not be empty"));
        assert_eq!(check_base_url("thunder/"), Err("must start with `/`"));
        assert_eq!(check_base_url("/thunder"), Err("must end with `/`"));
        assert_eq!(check_base_url("/a//b/"), Err("must not contain empty path segments"));
        assert_eq!(check_base_url("/a/../"), Err("must not contain `.` or `..` segments"));
        assert_eq!(check_base_url("/a?b/"), Err("must not contain a query or fragment"));
        assert_eq!(check_base_url("/my docs/"), Err("must not contain whitespace"));
        assert_eq!(
            check_base_url("/dökumente/"),
            Err("contains characters that must be percent-encoded")
        );
    }

    #[test]
    fn test_malformed_base_url_is_reported() {
        let settings = SiteSettings {
            base_url: "thunder".into(),
            ..thunder(&["en"])
        };
        let err = settings.resolve().unwrap_err();
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_url_must_be_origin_only() {
        let mut diag = ConfigDiagnostics::new();
        let settings = SiteSettings {
            url: Some("https://example.github.io/thunder".into()),
            ..thunder(&["en"])
        };
        settings.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteSettings::URL);

        let mut diag = ConfigDiagnostics::new();
        let settings = SiteSettings {
            url: Some("ftp://example.com".into()),
            ..thunder(&["en"])
        };
        settings.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_empty_title_and_absolute_favicon() {
        let mut diag = ConfigDiagnostics::new();
        let settings = SiteSettings {
            title: " ".into(),
            favicon: Some("/img/logo.svg".into()),
            ..thunder(&["en"])
        };
        settings.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.title", "site.favicon"]);
    }

    #[test]
    fn test_repository_url() {
        let settings = SiteSettings {
            url: Some("https://dream-horizon-org.github.io/".into()),
            base_url: "/raven-thunder/".into(),
            organization_name: "dream-horizon-org".into(),
            project_name: "thunder".into(),
            ..SiteSettings::default()
        };
        assert_eq!(
            settings.repository_url().as_deref(),
            Some("https://github.com/dream-horizon-org/thunder")
        );
        assert_eq!(SiteSettings::default().repository_url(), None);
    }
}
