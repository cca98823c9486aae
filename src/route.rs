//! Document id → URL path mapping.
//!
//! ```text
//! base_url = "/raven-thunder/", route_base_path = "/"
//!
//! index                    → /raven-thunder/
//! getting-started/overview → /raven-thunder/getting-started/overview
//! api/index                → /raven-thunder/api/
//! ```

/// Builds site paths for documents, the landing page and static files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    /// Always starts and ends with `/`.
    base_url: String,
    /// Docs mount point below `base_url`, without outer slashes.
    route_base: String,
    trailing_slash: Option<bool>,
}

impl Router {
    pub fn new(base_url: &str, route_base: &str, trailing_slash: Option<bool>) -> Self {
        let base = base_url.trim_matches('/');
        let base_url = if base.is_empty() {
            "/".to_owned()
        } else {
            format!("/{base}/")
        };
        Self {
            base_url,
            route_base: route_base.trim_matches('/').to_owned(),
            trailing_slash,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The landing page lives at the site root.
    pub fn landing_route(&self) -> String {
        self.base_url.clone()
    }

    /// Route of the document `id`.
    ///
    /// `index` documents map to their directory.
    pub fn doc_route(&self, id: &str) -> String {
        let id = id.trim_matches('/');
        let page = if id == "index" {
            ""
        } else if let Some(dir) = id.strip_suffix("/index") {
            dir
        } else {
            id
        };

        let mut path = self.base_url.clone();
        for part in [self.route_base.as_str(), page] {
            if !part.is_empty() {
                path.push_str(part);
                path.push('/');
            }
        }
        // Only directory-like routes keep the slash by default
        if !page.is_empty() && page == id {
            path.pop();
        }
        self.apply_trailing_slash(path)
    }

    /// Internal link target as written in config, with the trailing-slash
    /// policy applied to its path part.
    pub fn link(&self, target: &str) -> String {
        let split = target.find(['#', '?']).unwrap_or(target.len());
        let (path, suffix) = target.split_at(split);
        let mut link = self.apply_trailing_slash(path.to_owned());
        link.push_str(suffix);
        link
    }

    /// Static file below the base path (`img/logo.svg` → `/raven-thunder/img/logo.svg`).
    pub fn asset(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Canonical form of a site path for comparisons: no query, fragment or
    /// trailing slash (except for the site root).
    pub fn normalize(&self, path: &str) -> String {
        let path = path.split(['#', '?']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return "/".to_owned();
        }
        let root = format!("{trimmed}/");
        if root == self.base_url {
            root
        } else {
            trimmed.to_owned()
        }
    }

    fn apply_trailing_slash(&self, mut path: String) -> String {
        match self.trailing_slash {
            Some(true) if !path.ends_with('/') => path.push('/'),
            Some(false) if path != self.base_url && path.ends_with('/') => {
                path.pop();
            }
            _ => {}
        }
        path
    }
}
