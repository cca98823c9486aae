//! `[landing]` section configuration.
//!
//! Content of the landing page. Without a `[landing]` section the built-in
//! Thunder landing page is used.
//!
//! # Example
//!
//! ```toml
//! [landing]
//! description = "A powerful Java 17 + Vert.x platform for managing user journeys and nudges"
//!
//! [landing.hero]
//! subtitle = "A powerful Java 17 + Vert.x platform for managing user journeys and nudges"
//! buttons = [
//!     { label = "Get Started", to = "/raven-thunder/getting-started/overview", primary = true },
//!     { label = "View on GitHub", href = "https://github.com/dream-horizon-org/thunder" },
//! ]
//!
//! [[landing.features]]
//! emoji = "🚀"
//! title = "Multi-Module Architecture"
//! description = "Clean separation with thunder-core, thunder-api, and thunder-admin modules."
//! ```

use serde::{Deserialize, Serialize};

use super::theme::{Target, validate_external, validate_target};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// `<title>` of the landing page. Falls back to `site.title`.
    pub title: Option<String>,

    /// `<meta name="description">`. Falls back to `site.tagline`.
    pub description: Option<String>,

    pub hero: HeroConfig,

    /// Cards of the "Features" grid, in display order.
    pub features: Vec<FeatureCard>,

    /// Cards linking to sibling products and the source repository.
    pub platform: Vec<PlatformComponent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Falls back to `site.title`.
    pub title: Option<String>,
    /// Falls back to `site.tagline`.
    pub subtitle: Option<String>,
    pub buttons: Vec<HeroButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroButton {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
    /// Primary (filled) or secondary (outlined) style.
    #[serde(default)]
    pub primary: bool,
}

impl HeroButton {
    pub fn target(&self) -> Option<Target<'_>> {
        Target::from_fields(self.to.as_deref(), self.href.as_deref())
    }
}

/// A literal feature entry rendered on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub emoji: String,
    pub title: String,
    pub description: String,
    /// Optional outbound link shown under the description.
    pub link: Option<String>,
}

/// A linked external property (sibling product site, source repository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformComponent {
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub link: String,
}

impl FeatureCard {
    pub fn new(emoji: &str, title: &str, description: &str) -> Self {
        Self {
            emoji: emoji.into(),
            title: title.into(),
            description: description.into(),
            link: None,
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self::thunder()
    }
}

impl LandingConfig {
    pub const HERO_BUTTONS: FieldPath = FieldPath::new("landing.hero.buttons");
    pub const FEATURES: FieldPath = FieldPath::new("landing.features");
    pub const PLATFORM: FieldPath = FieldPath::new("landing.platform");

    /// The Raven Thunder landing page.
    pub fn thunder() -> Self {
        const SUMMARY: &str =
            "A powerful Java 17 + Vert.x platform for managing user journeys and nudges";
        const REPOSITORY: &str = "https://github.com/dream-horizon-org/thunder";

        Self {
            title: None,
            description: Some(SUMMARY.into()),
            hero: HeroConfig {
                title: None,
                subtitle: Some(SUMMARY.into()),
                buttons: vec![
                    HeroButton {
                        label: "Get Started".into(),
                        to: Some("/raven-thunder/getting-started/overview".into()),
                        href: None,
                        primary: true,
                    },
                    HeroButton {
                        label: "View on GitHub".into(),
                        to: None,
                        href: Some(REPOSITORY.into()),
                        primary: false,
                    },
                ],
            },
            features: vec![
                FeatureCard::new(
                    "🚀",
                    "Multi-Module Architecture",
                    "Clean separation with thunder-core, thunder-api, and thunder-admin modules.",
                ),
                FeatureCard::new(
                    "🔌",
                    "REST APIs",
                    "Complete Admin API (19 endpoints) and SDK/Debug APIs (7 endpoints) for managing CTA Journeys and Behaviour.",
                ),
                FeatureCard::new(
                    "💾",
                    "Aerospike Integration",
                    "Reactive data access with RxJava3, complete with Docker setup, seed data, and indexes for local development.",
                ),
                FeatureCard::new(
                    "🐳",
                    "Docker Ready",
                    "Full Docker Compose setup with Aerospike, automatic seed data, and pre-configured indexes.",
                ),
                FeatureCard::new(
                    "✅",
                    "Health Checks",
                    "Comprehensive health monitoring for services and Aerospike connectivity.",
                ),
                FeatureCard::new(
                    "🧪",
                    "Testing",
                    "CI with unit and integration tests, release as Docker images and fat JARs.",
                ),
            ],
            platform: vec![PlatformComponent {
                emoji: "📦".into(),
                title: "Source Code".into(),
                description: "Browse the thunder-core, thunder-api and thunder-admin modules on GitHub."
                    .into(),
                link: REPOSITORY.into(),
            }],
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, button) in self.hero.buttons.iter().enumerate() {
            let field = Self::HERO_BUTTONS.index(i);
            if button.label.trim().is_empty() {
                diag.error(field.child("label"), "button label must not be empty");
            }
            validate_target(button.to.as_deref(), button.href.as_deref(), &field, diag);
        }

        for (i, card) in self.features.iter().enumerate() {
            let field = Self::FEATURES.index(i);
            if card.title.trim().is_empty() {
                diag.error(field.child("title"), "feature title must not be empty");
            }
            if let Some(link) = &card.link {
                validate_external(link, field.child("link"), diag);
            }
        }

        for (i, component) in self.platform.iter().enumerate() {
            let field = Self::PLATFORM.index(i);
            if component.title.trim().is_empty() {
                diag.error(field.child("title"), "platform title must not be empty");
            }
            validate_external(&component.link, field.child("link"), diag);
        }
    }

    /// Link targets of the hero buttons.
    pub fn targets(&self) -> Vec<(FieldPath, Target<'_>)> {
        self.hero
            .buttons
            .iter()
            .enumerate()
            .filter_map(|(i, button)| button.target().map(|t| (Self::HERO_BUTTONS.index(i), t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thunder_literal_is_valid() {
        let landing = LandingConfig::thunder();
        assert_eq!(landing.features.len(), 6);
        assert_eq!(landing.features[0].title, "Multi-Module Architecture");
        assert_eq!(landing.features[5].emoji, "🧪");

        let mut diag = ConfigDiagnostics::new();
        landing.validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let landing: LandingConfig = toml::from_str(
            r#"
[[features]]
emoji = "⚡"
title = "Fast"
description = "Builds in milliseconds."
link = "https://example.com/bench"
"#,
        )
        .unwrap();
        assert_eq!(landing.features.len(), 1);
        assert_eq!(landing.features[0].link.as_deref(), Some("https://example.com/bench"));
        // Unspecified parts come from the built-in page
        assert_eq!(landing.hero.buttons.len(), 2);
    }

    #[test]
    fn test_platform_link_must_be_url() {
        let mut landing = LandingConfig::thunder();
        landing.platform[0].link = "github.com/thunder".into();
        let mut diag = ConfigDiagnostics::new();
        landing.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "landing.platform[0].link");
    }
}
