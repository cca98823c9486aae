//! Steps shared by `check` and `build`.

use anyhow::{Context, Result};

use crate::config::{ConfigDiagnostics, SiteConfig};
use crate::docs::DocumentIndex;
use crate::links::check_links;
use crate::nav::{ResolvedSidebar, Sidebars, build_sidebars};
use crate::utils::plural_count;
use crate::{debug, log};

/// Documents and navigation of a site that passed every check.
#[derive(Debug)]
pub struct Site {
    pub docs: DocumentIndex,
    pub sidebars: Vec<ResolvedSidebar>,
}

/// Scan documents, resolve sidebars and check links.
///
/// Any failure aborts: unknown sidebar references, unresolvable documents,
/// and broken links under the `throw` policy.
pub fn resolve_site(config: &SiteConfig) -> Result<Site> {
    let docs = DocumentIndex::scan(&config.docs.path).context("Failed to scan documents")?;
    debug!("docs"; "found {}", plural_count(docs.len(), "document"));

    let sidebars = Sidebars::load(&config.docs.sidebar_path)?;
    if sidebars.is_empty() {
        log!("warning"; "{} defines no sidebars", config.docs.sidebar_path.display());
    }

    let mut diag = ConfigDiagnostics::new();
    config
        .theme
        .navbar
        .validate_sidebar_refs(sidebars.ids(), &mut diag);
    diag.finish()?;

    let sidebars = build_sidebars(&sidebars, &docs)?;
    check_links(config, &docs)?;

    Ok(Site { docs, sidebars })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(root: &Path, sidebars: &str) -> SiteConfig {
        write(root, "docs/index.md", "# Introduction\n");
        write(
            root,
            "docs/getting-started/overview.md",
            "---\nsidebar_label: Overview\n---\n# Getting Started\n",
        );
        write(root, "sidebars.json", sidebars);

        let mut config = SiteConfig::default();
        config.site.title = "Test".into();
        config.site.tagline = "Test".into();
        config.docs.path = root.join("docs");
        config.docs.sidebar_path = root.join("sidebars.json");
        config.theme.navbar.items.clear();
        config.theme.footer.links.clear();
        config.landing.hero.buttons.clear();
        config
    }

    #[test]
    fn test_resolve_site() {
        let dir = TempDir::new().unwrap();
        let config = site(
            dir.path(),
            r#"{ "docs": ["index", { "type": "category", "label": "Getting Started", "items": ["getting-started/overview"] }] }"#,
        );

        let site = resolve_site(&config).unwrap();
        assert_eq!(site.docs.len(), 2);
        assert_eq!(site.sidebars.len(), 1);
        assert_eq!(site.sidebars[0].first_doc(), Some("index"));
    }

    #[test]
    fn test_resolve_site_unknown_document() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path(), r#"{ "docs": ["index", "missing"] }"#);

        let err = resolve_site(&config).unwrap_err();
        assert!(err.to_string().contains("unknown document `missing`"));
    }

    #[test]
    fn test_resolve_site_missing_sidebar_file() {
        let dir = TempDir::new().unwrap();
        let mut config = site(dir.path(), "{}");
        config.docs.sidebar_path = dir.path().join("nope.json");

        assert!(resolve_site(&config).is_err());
    }
}
