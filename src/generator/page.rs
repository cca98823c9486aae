//! Page shell: `<head>`, navbar and footer around a rendered body.

use crate::config::SiteConfig;
use crate::config::section::theme::{FooterConfig, NavbarConfig, NavbarItem, Position};
use crate::embed::{PAGE_HTML, PageVars, THEME_CSS_PATH};
use crate::landing::anchor;
use crate::nav::ResolvedSidebar;
use crate::route::Router;
use crate::utils::html::escape;

/// Per-page values for [`compose_page`].
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Wrap `body` in a full HTML document.
pub fn compose_page(
    config: &SiteConfig,
    sidebars: &[ResolvedSidebar],
    router: &Router,
    meta: &PageMeta<'_>,
    body: &str,
) -> String {
    let theme = &config.theme;

    let mut head = format!(
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape(&router.asset(THEME_CSS_PATH))
    );
    if let Some(favicon) = &config.site.favicon {
        head.push_str(&format!(
            "\n<link rel=\"icon\" href=\"{}\">",
            escape(&router.asset(favicon))
        ));
    }

    PAGE_HTML.render(&PageVars {
        lang: &escape(&config.site.i18n.default_locale),
        theme: theme.color_mode.default_mode.as_str(),
        respect_prefers_color_scheme: theme.color_mode.respect_prefers_color_scheme,
        title: &escape(meta.title),
        description: &escape(meta.description),
        head: &head,
        navbar: &render_navbar(
            &theme.navbar,
            &config.site.title,
            !theme.color_mode.disable_switch,
            sidebars,
            router,
        ),
        body,
        footer: &render_footer(&theme.footer, router),
    })
}

fn render_navbar(
    navbar: &NavbarConfig,
    site_title: &str,
    color_switch: bool,
    sidebars: &[ResolvedSidebar],
    router: &Router,
) -> String {
    let mut html = String::from("<nav class=\"navbar\">\n");

    html.push_str(&format!(
        "<a class=\"navbar__brand\" href=\"{}\">",
        escape(&router.landing_route())
    ));
    if let Some(logo) = &navbar.logo {
        html.push_str(&format!(
            "<img class=\"navbar__logo\" src=\"{}\" alt=\"{}\">",
            escape(&router.asset(&logo.src)),
            escape(&logo.alt)
        ));
    }
    let title = navbar.title.as_deref().unwrap_or(site_title);
    html.push_str(&format!("<span>{}</span></a>\n", escape(title)));

    for (position, class) in [
        (Position::Left, "navbar__items"),
        (Position::Right, "navbar__items navbar__items--right"),
    ] {
        let links: Vec<String> = navbar
            .items
            .iter()
            .filter(|item| item.position() == position)
            .filter_map(|item| navbar_link(item, sidebars, router))
            .collect();
        let toggle = position == Position::Right && color_switch;
        if links.is_empty() && !toggle {
            continue;
        }
        html.push_str(&format!("<div class=\"{class}\">\n"));
        for link in links {
            html.push_str(&link);
            html.push('\n');
        }
        if toggle {
            html.push_str(
                "<button class=\"color-mode-toggle\" type=\"button\" aria-label=\"Switch between dark and light mode\">◐</button>\n",
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str("</nav>");
    html
}

/// Doc-sidebar items link to the sidebar's first document.
fn navbar_link(item: &NavbarItem, sidebars: &[ResolvedSidebar], router: &Router) -> Option<String> {
    let label = escape(item.label());
    match item {
        NavbarItem::DocSidebar(doc) => {
            let first = sidebars
                .iter()
                .find(|s| s.id == doc.sidebar_id)
                .and_then(ResolvedSidebar::first_doc)?;
            Some(format!(
                "<a href=\"{}\">{label}</a>",
                escape(&router.doc_route(first))
            ))
        }
        NavbarItem::Link(link) => {
            let target = crate::config::Target::from_fields(link.to.as_deref(), link.href.as_deref())?;
            Some(anchor(None, target, &label, router))
        }
    }
}

fn render_footer(footer: &FooterConfig, router: &Router) -> String {
    if footer.links.is_empty() && footer.copyright.is_empty() {
        return String::new();
    }

    let mut html = format!("<footer class=\"footer footer--{}\">\n", footer.style.as_str());
    if !footer.links.is_empty() {
        html.push_str("<div class=\"footer__links\">\n");
        for group in &footer.links {
            html.push_str(&format!(
                "<div class=\"footer__col\">\n<div class=\"footer__title\">{}</div>\n<ul class=\"footer__items\">\n",
                escape(&group.title)
            ));
            for link in &group.items {
                if let Some(target) = link.target() {
                    html.push_str(&format!(
                        "<li>{}</li>\n",
                        anchor(None, target, &escape(&link.label), router)
                    ));
                }
            }
            html.push_str("</ul>\n</div>\n");
        }
        html.push_str("</div>\n");
    }
    if !footer.copyright.is_empty() {
        html.push_str(&format!(
            "<div class=\"footer__copyright\">{}</div>\n",
            escape(&footer.copyright)
        ));
    }
    html.push_str("</footer>");
    html
}
