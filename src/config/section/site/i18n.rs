//! `[site.i18n]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Locale settings. The first page language is `default_locale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale the site is written in (e.g., "en").
    pub default_locale: String,

    /// Every locale the site is built for, in display order.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

impl I18nConfig {
    pub const DEFAULT_LOCALE: FieldPath = FieldPath::new("site.i18n.default_locale");
    pub const LOCALES: FieldPath = FieldPath::new("site.i18n.locales");

    /// Validate locale settings.
    ///
    /// # Checks
    /// - `locales` is non-empty
    /// - every locale is a well-formed code and listed once
    /// - `default_locale` is one of `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::LOCALES,
                "locale list is empty",
                format!("add at least the default locale, e.g.: [\"{}\"]", self.default_locale),
            );
            return;
        }

        for (i, locale) in self.locales.iter().enumerate() {
            if !is_locale_code(locale) {
                diag.error(
                    Self::LOCALES.index(i),
                    format!("`{locale}` is not a valid locale code"),
                );
            } else if self.locales[..i].contains(locale) {
                diag.error(Self::LOCALES.index(i), format!("locale `{locale}` is listed twice"));
            }
        }

        if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::DEFAULT_LOCALE,
                format!(
                    "default locale `{}` is not in {}",
                    self.default_locale,
                    Self::LOCALES
                ),
                format!("add \"{}\" to {}", self.default_locale, Self::LOCALES),
            );
        }
    }
}

/// BCP 47-ish shape: alphanumeric subtags separated by `-`.
fn is_locale_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .split('-')
            .all(|tag| !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()))
}
