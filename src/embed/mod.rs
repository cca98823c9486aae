//! Embedded static resources.
//!
//! - `page.html` - document shell every generated page is wrapped in
//! - `theme.css` - stylesheet for navbar, hero, cards and footer
//!
//! # Usage
//!
//! ```ignore
//! use embed::{PAGE_HTML, PageVars};
//!
//! let html = PAGE_HTML.render(&PageVars { lang: "en", body: &body, .. });
//! ```

mod template;

pub use template::{Template, TemplateVars};

/// Output path of the stylesheet, relative to the output directory.
pub const THEME_CSS_PATH: &str = "assets/theme.css";

/// Stylesheet linked from every page.
pub const THEME_CSS: &str = include_str!("theme.css");

/// Variables for page.html template.
///
/// `head` and `body` parts are inserted verbatim; callers escape text.
pub struct PageVars<'a> {
    pub lang: &'a str,
    pub theme: &'a str,
    pub respect_prefers_color_scheme: bool,
    pub title: &'a str,
    pub description: &'a str,
    pub head: &'a str,
    pub navbar: &'a str,
    pub body: &'a str,
    pub footer: &'a str,
}

impl TemplateVars for PageVars<'_> {
    fn apply(&self, content: &str) -> String {
        // Body last: user content must never be scanned for placeholders
        content
            .replace("__LANG__", self.lang)
            .replace("__THEME__", self.theme)
            .replace(
                "__RESPECT_PREFERS__",
                if self.respect_prefers_color_scheme { "true" } else { "false" },
            )
            .replace("__TITLE__", self.title)
            .replace("__DESCRIPTION__", self.description)
            .replace("__HEAD__", self.head)
            .replace("__NAVBAR__", self.navbar)
            .replace("__FOOTER__", self.footer)
            .replace("__BODY__", self.body)
    }
}

/// HTML shell for generated pages.
pub const PAGE_HTML: Template<PageVars<'static>> = Template::new(include_str!("page.html"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_template_fills_every_placeholder() {
        let html = PAGE_HTML.render(&PageVars {
            lang: "en",
            theme: "dark",
            respect_prefers_color_scheme: true,
            title: "Raven Thunder",
            description: "CTAs",
            head: "<link rel=\"icon\" href=\"/img/logo.svg\">",
            navbar: "<nav></nav>",
            body: "<main>__TITLE__</main>",
            footer: "<footer></footer>",
        });
        assert!(html.contains("<html lang=\"en\" data-theme=\"dark\""));
        assert!(html.contains("<title>Raven Thunder</title>"));
        // Placeholders inside the body are left alone
        assert!(html.contains("<main>__TITLE__</main>"));
        assert!(!html.contains("__NAVBAR__"));
        assert!(!html.contains("__HEAD__"));
    }
}
