//! Landing page rendering.
//!
//! Pure functions from [`LandingConfig`] values to HTML markup. No I/O and
//! no error path: the same input always renders to the same bytes. Every
//! piece of configured text goes through [`escape`].

use crate::config::{FeatureCard, LandingConfig, PlatformComponent, Target};
use crate::route::Router;
use crate::utils::html::escape;

/// Attributes added to links leaving the site.
const EXTERNAL_ATTRS: &str = r#" target="_blank" rel="noopener noreferrer""#;

/// Render hero, features grid and platform grid.
///
/// `fallback_title` and `fallback_tagline` (usually `site.title` and
/// `site.tagline`) fill in a hero without its own title or subtitle.
pub fn render_landing(
    landing: &LandingConfig,
    fallback_title: &str,
    fallback_tagline: &str,
    router: &Router,
) -> String {
    let hero = &landing.hero;
    let title = hero.title.as_deref().unwrap_or(fallback_title);
    let subtitle = hero.subtitle.as_deref().unwrap_or(fallback_tagline);

    let mut html = String::new();
    html.push_str("<header class=\"hero\">\n<div class=\"container\">\n");
    html.push_str(&format!(
        "<h1 class=\"hero__title\">⚡ {} ⚡</h1>\n",
        escape(title)
    ));
    if !subtitle.is_empty() {
        html.push_str(&format!(
            "<p class=\"hero__subtitle\">{}</p>\n",
            escape(subtitle)
        ));
    }
    if !hero.buttons.is_empty() {
        html.push_str("<div class=\"hero__buttons\">\n");
        for button in &hero.buttons {
            let Some(target) = button.target() else {
                continue;
            };
            let style = if button.primary { "primary" } else { "secondary" };
            html.push_str(&anchor(
                Some(&format!("button button--{style} button--lg")),
                target,
                &escape(&button.label),
                router,
            ));
            html.push('\n');
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</header>\n");

    html.push_str("<main class=\"container\">\n");
    if !landing.features.is_empty() {
        html.push_str("<section class=\"features\">\n<h2>Features</h2>\n<div class=\"row\">\n");
        html.push_str(&render_cards(&landing.features));
        html.push_str("</div>\n</section>\n");
    }
    if !landing.platform.is_empty() {
        html.push_str("<section class=\"platform\">\n<h2>Platform</h2>\n<div class=\"row\">\n");
        html.push_str(&render_platform(&landing.platform));
        html.push_str("</div>\n</section>\n");
    }
    html.push_str("</main>\n");
    html
}

/// One card per feature, in order.
pub fn render_cards(cards: &[FeatureCard]) -> String {
    let mut html = String::new();
    for card in cards {
        html.push_str("<div class=\"col col--4\">\n<div class=\"card\">\n");
        html.push_str(&card_header(&card.emoji, &card.title));
        html.push_str(&format!(
            "<div class=\"card__body\">\n<p>{}</p>\n",
            escape(&card.description)
        ));
        if let Some(link) = &card.link {
            html.push_str(&format!(
                "<p><a href=\"{}\"{EXTERNAL_ATTRS}>Learn more</a></p>\n",
                escape(link)
            ));
        }
        html.push_str("</div>\n</div>\n</div>\n");
    }
    html
}

/// One linked card per platform component.
pub fn render_platform(components: &[PlatformComponent]) -> String {
    let mut html = String::new();
    for component in components {
        html.push_str(&format!(
            "<div class=\"col col--4\">\n<a class=\"card card--link\" href=\"{}\"{EXTERNAL_ATTRS}>\n",
            escape(&component.link)
        ));
        html.push_str(&card_header(&component.emoji, &component.title));
        html.push_str(&format!(
            "<div class=\"card__body\">\n<p>{}</p>\n</div>\n</a>\n</div>\n",
            escape(&component.description)
        ));
    }
    html
}

fn card_header(emoji: &str, title: &str) -> String {
    format!(
        "<div class=\"card__header\">\n<h3>{} {}</h3>\n</div>\n",
        escape(emoji),
        escape(title)
    )
}

/// `<a>` for a configured target. `label` must already be escaped.
pub(crate) fn anchor(class: Option<&str>, target: Target<'_>, label: &str, router: &Router) -> String {
    let class = class
        .map(|c| format!(" class=\"{}\"", escape(c)))
        .unwrap_or_default();
    match target {
        Target::Internal(to) => {
            format!("<a{class} href=\"{}\">{label}</a>", escape(&router.link(to)))
        }
        Target::External(href) => {
            format!("<a{class} href=\"{}\"{EXTERNAL_ATTRS}>{label}</a>", escape(href))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new("/raven-thunder/", "/", Some(false))
    }

    fn render(landing: &LandingConfig) -> String {
        render_landing(
            landing,
            "Raven Thunder",
            "CTAs, Nudges and Behaviour Tags platform",
            &router(),
        )
    }

    #[test]
    fn test_render_is_idempotent() {
        let landing = LandingConfig::thunder();
        assert_eq!(render(&landing), render(&landing));
        assert_eq!(render_cards(&landing.features), render_cards(&landing.features));
    }

    #[test]
    fn test_thunder_landing() {
        let html = render(&LandingConfig::thunder());
        assert!(html.contains("<h1 class=\"hero__title\">⚡ Raven Thunder ⚡</h1>"));
        assert!(html.contains(
            "<p class=\"hero__subtitle\">A powerful Java 17 + Vert.x platform for managing user journeys and nudges</p>"
        ));
        assert!(html.contains(
            "<a class=\"button button--primary button--lg\" href=\"/raven-thunder/getting-started/overview\">Get Started</a>"
        ));
        assert!(html.contains(
            "href=\"https://github.com/dream-horizon-org/thunder\" target=\"_blank\" rel=\"noopener noreferrer\">View on GitHub</a>"
        ));
        assert!(html.contains("<h3>🐳 Docker Ready</h3>"));
        assert_eq!(html.matches("<div class=\"card\">").count(), 6);
        assert_eq!(html.matches("class=\"card card--link\"").count(), 1);
    }

    #[test]
    fn test_cards_in_order_with_optional_link() {
        let mut cards = vec![
            FeatureCard::new("🚀", "First", "One"),
            FeatureCard::new("🔌", "Second", "Two"),
        ];
        cards[1].link = Some("https://example.com/docs".into());

        let html = render_cards(&cards);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("Learn more").count(), 1);
        assert!(html.contains("href=\"https://example.com/docs\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let cards = [FeatureCard::new("<b>", "A & B", "<script>alert(1)</script>")];
        let html = render_cards(&cards);
        assert!(html.contains("<h3>&lt;b&gt; A &amp; B</h3>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_fallbacks_and_empty_sections() {
        let landing = LandingConfig {
            title: None,
            description: None,
            hero: Default::default(),
            features: Vec::new(),
            platform: Vec::new(),
        };
        let html = render(&landing);
        assert!(html.contains("⚡ Raven Thunder ⚡"));
        assert!(html.contains("CTAs, Nudges and Behaviour Tags platform"));
        assert!(!html.contains("hero__buttons"));
        assert!(!html.contains("Features"));
        assert!(!html.contains("Platform"));
    }

    #[test]
    fn test_internal_anchor_uses_trailing_slash_policy() {
        let router = Router::new("/raven-thunder/", "/", Some(true));
        let html = anchor(None, Target::Internal("/raven-thunder/api/overview"), "API", &router);
        assert_eq!(html, "<a href=\"/raven-thunder/api/overview/\">API</a>");
    }
}
