//! `[build]` section configuration.
//!
//! Where generated artifacts go and which of them are produced.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "build"              # Output directory (relative to site root)
//! manifest = "navigation.json"  # Resolved sidebars, relative to output
//!
//! [build.sitemap]
//! enable = true                 # Generate sitemap.xml (needs site.url)
//! path = "sitemap.xml"
//! ```

mod sitemap;

pub use sitemap::SitemapConfig;

use super::SiteSettings;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// File name of the navigation manifest written into `output`.
    pub manifest: PathBuf,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "build".into(),
            manifest: "navigation.json".into(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const MANIFEST: FieldPath = FieldPath::new("build.manifest");
    pub const SITEMAP_PATH: FieldPath = FieldPath::new("build.sitemap.path");

    /// Validate raw (not yet root-joined) paths.
    ///
    /// Must run before normalization, which turns every path absolute.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if !is_plain_relative(&self.output) {
            diag.error_with_hint(
                Self::OUTPUT,
                format!("`{}` must be a relative path inside the site root", self.output.display()),
                "use a directory name like \"build\"",
            );
        }
        for (field, path) in [
            (Self::MANIFEST, &self.manifest),
            (Self::SITEMAP_PATH, &self.sitemap.path),
        ] {
            if !is_plain_relative(path) {
                diag.error(
                    field,
                    format!("`{}` must be a relative path inside the output directory", path.display()),
                );
            }
        }
    }

    /// Cross-section checks against `[site]`.
    pub fn validate(&self, site: &SiteSettings, diag: &mut ConfigDiagnostics) {
        if self.sitemap.enable && site.url.is_none() {
            diag.warn(
                FieldPath::new("build.sitemap.enable"),
                "sitemap is enabled but site.url is not set, sitemap will be skipped",
            );
        }
    }
}

/// Relative, non-empty, and never climbing out with `..`.
pub(crate) fn is_plain_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
