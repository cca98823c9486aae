//! Site building orchestration.
//!
//! Build phases:
//! - **Resolve** - Scan documents, resolve sidebars, check links
//! - **Landing** - Render the landing page into the page shell
//! - **Artifacts** - Theme stylesheet, navigation manifest and sitemap

use anyhow::{Context, Result};
use std::path::Path;

use super::common::{Site, resolve_site};
use crate::config::SiteConfig;
use crate::embed::{THEME_CSS, THEME_CSS_PATH};
use crate::generator::{Manifest, PageMeta, Sitemap, compose_page, write_output};
use crate::landing::render_landing;
use crate::route::Router;
use crate::utils::plural_count;
use crate::{debug, log};

/// Build the site into `build.output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let site = resolve_site(config)?;
    let router = config.router();
    let output = config.build.output.as_path();

    write_landing(config, &site, &router, output)?;
    write_output(&output.join(THEME_CSS_PATH), THEME_CSS)?;

    let (manifest, sitemap) = rayon::join(
        || write_manifest(config, &site, &router, output),
        || write_sitemap(config, &site, &router, output),
    );
    manifest?;
    sitemap?;

    log!(
        "build";
        "{} and {} written to {}",
        plural_count(site.docs.len(), "document"),
        plural_count(site.sidebars.len(), "sidebar"),
        output.display()
    );
    Ok(())
}

fn write_landing(config: &SiteConfig, site: &Site, router: &Router, output: &Path) -> Result<()> {
    let landing = &config.landing;
    let body = render_landing(landing, &config.site.title, &config.site.tagline, router);
    let meta = PageMeta {
        title: landing.title.as_deref().unwrap_or(&config.site.title),
        description: landing
            .description
            .as_deref()
            .unwrap_or(&config.site.tagline),
    };

    let html = compose_page(config, &site.sidebars, router, &meta, &body);
    let path = output.join("index.html");
    write_output(&path, html)?;
    debug!("landing"; "wrote {}", path.display());
    Ok(())
}

fn write_manifest(config: &SiteConfig, site: &Site, router: &Router, output: &Path) -> Result<()> {
    let json = Manifest::new(&config.site, &site.sidebars, router)
        .to_json()
        .context("Failed to serialize navigation manifest")?;
    let path = output.join(&config.build.manifest);
    write_output(&path, json)?;
    debug!("manifest"; "wrote {}", path.display());
    Ok(())
}

fn write_sitemap(config: &SiteConfig, site: &Site, router: &Router, output: &Path) -> Result<()> {
    if !config.build.sitemap.enable {
        return Ok(());
    }
    // `SiteConfig::resolve` already warned about this
    let Some(origin) = config.site.url.as_deref() else {
        return Ok(());
    };

    let sitemap = Sitemap::build(origin, router, &site.docs);
    let count = sitemap.len();
    let path = output.join(&config.build.sitemap.path);
    write_output(&path, sitemap.into_xml())?;
    debug!("sitemap"; "wrote {} to {}", plural_count(count, "url"), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(root: &Path) -> SiteConfig {
        write(root, "docs/index.md", "# Introduction\n");
        write(
            root,
            "docs/getting-started/overview.md",
            "# Overview\n\nBack to [intro](../index.md).\n",
        );
        write(
            root,
            "sidebars.json",
            r#"{ "docs": ["index", { "type": "category", "label": "Getting Started", "items": ["getting-started/overview"] }] }"#,
        );

        let mut config = SiteConfig::default();
        config.site.title = "Raven Thunder".into();
        config.site.tagline = "Journeys and nudges".into();
        config.site.url = Some("https://example.github.io".into());
        config.docs.path = root.join("docs");
        config.docs.sidebar_path = root.join("sidebars.json");
        config.build.output = root.join("build");
        config.landing.hero.buttons.clear();
        config
    }

    #[test]
    fn test_build_writes_artifacts() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        build_site(&config).unwrap();

        let out = dir.path().join("build");
        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("<title>Raven Thunder</title>"));
        assert!(index.contains("Multi-Module Architecture"));
        assert!(out.join("assets/theme.css").is_file());

        let manifest = fs::read_to_string(out.join("navigation.json")).unwrap();
        assert!(manifest.contains("\"href\": \"/getting-started/overview\""));

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.github.io/getting-started/overview</loc>"));
    }

    #[test]
    fn test_build_without_url_skips_sitemap() {
        let dir = TempDir::new().unwrap();
        let mut config = site(dir.path());
        config.site.url = None;
        build_site(&config).unwrap();

        let out = dir.path().join("build");
        assert!(out.join("index.html").is_file());
        assert!(!out.join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_stops_on_unknown_document() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        write(dir.path(), "sidebars.json", r#"{ "docs": ["missing"] }"#);

        assert!(build_site(&config).is_err());
        assert!(!dir.path().join("build/index.html").exists());
    }
}
