//! Sitemap generation.
//!
//! Lists the landing page and every document route for search engine
//! indexing. Locations are absolute, so `site.url` is required.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://dream-horizon-org.github.io/raven-thunder/</loc>
//!   </url>
//! </urlset>
//! ```

use rustc_hash::FxHashSet;

use crate::docs::DocumentCollection;
use crate::route::Router;
use crate::utils::html::escape_xml;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Default)]
pub struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    /// Landing page first, then documents in id order. A document whose
    /// route is taken (e.g. `index` under the landing page) is listed once.
    pub fn build(origin: &str, router: &Router, docs: &impl DocumentCollection) -> Self {
        let origin = origin.trim_end_matches('/');
        let mut seen = FxHashSet::default();

        let urls = std::iter::once(router.landing_route())
            .chain(docs.documents().iter().map(|doc| router.doc_route(&doc.id)))
            .filter(|route| seen.insert(route.clone()))
            .map(|route| format!("{origin}{route}"))
            .collect();

        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 64);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
