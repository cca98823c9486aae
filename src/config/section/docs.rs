//! `[docs]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! path = "docs"                  # Markdown documents (relative to site root)
//! route_base_path = "/"          # Docs served directly under base_url
//! sidebar_path = "sidebars.json" # Navigation tree (relative to site root)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::build::is_plain_relative;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory holding the Markdown documents.
    pub path: PathBuf,

    /// Route segment docs are mounted on, below `site.base_url`.
    pub route_base_path: String,

    /// Sidebar definition file.
    pub sidebar_path: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base_path: "/".into(),
            sidebar_path: "sidebars.json".into(),
        }
    }
}

impl DocsConfig {
    pub const PATH: FieldPath = FieldPath::new("docs.path");
    pub const ROUTE_BASE_PATH: FieldPath = FieldPath::new("docs.route_base_path");
    pub const SIDEBAR_PATH: FieldPath = FieldPath::new("docs.sidebar_path");

    /// Validate raw (not yet root-joined) paths.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [(Self::PATH, &self.path), (Self::SIDEBAR_PATH, &self.sidebar_path)] {
            if !is_plain_relative(path) {
                diag.error(
                    field,
                    format!("`{}` must be a relative path inside the site root", path.display()),
                );
            }
        }
    }

    /// Validate the route base path.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let route = self.route_base_path.as_str();
        let bad_segment = route
            .split('/')
            .any(|seg| seg == "." || seg == ".." || seg.chars().any(char::is_whitespace));
        if route.contains(['?', '#', '\\']) || bad_segment {
            diag.error_with_hint(
                Self::ROUTE_BASE_PATH,
                format!("`{route}` is not a usable route segment"),
                "use \"/\" or a plain segment like \"docs\"",
            );
        }
    }

    /// Route base path as `/`-separated segments without outer slashes.
    pub fn route_segment(&self) -> &str {
        self.route_base_path.trim_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segment() {
        let docs = DocsConfig::default();
        assert_eq!(docs.route_segment(), "");

        let docs = DocsConfig {
            route_base_path: "/docs/".into(),
            ..DocsConfig::default()
        };
        assert_eq!(docs.route_segment(), "docs");
    }

    #[test]
    fn test_invalid_route_base_path() {
        let docs = DocsConfig {
            route_base_path: "../docs".into(),
            ..DocsConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        docs.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_absolute_docs_path_rejected() {
        let docs = DocsConfig {
            path: "/srv/docs".into(),
            ..DocsConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        docs.validate_paths(&mut diag);
        assert_eq!(diag.errors()[0].field, DocsConfig::PATH);
    }
}
