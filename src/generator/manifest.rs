//! Navigation manifest (`navigation.json`).
//!
//! The resolved sidebars with every document leaf turned into its route,
//! for the external site composer to render from.
//!
//! ```json
//! {
//!   "title": "Raven Thunder",
//!   "base_url": "/raven-thunder/",
//!   "repository": "https://github.com/dream-horizon-org/thunder",
//!   "sidebars": [
//!     { "id": "docs", "items": [
//!       { "type": "doc", "id": "index", "label": "Introduction", "href": "/raven-thunder/" }
//!     ] }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::config::SiteSettings;
use crate::nav::{NavigationNode, ResolvedSidebar};
use crate::route::Router;

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub title: &'a str,
    pub base_url: &'a str,
    /// From `site.organization_name` and `site.project_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub sidebars: Vec<ManifestSidebar<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ManifestSidebar<'a> {
    pub id: &'a str,
    pub items: Vec<ManifestNode<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestNode<'a> {
    Category {
        label: &'a str,
        collapsible: bool,
        collapsed: bool,
        items: Vec<ManifestNode<'a>>,
    },
    Doc {
        id: &'a str,
        label: &'a str,
        href: String,
    },
    Link {
        label: &'a str,
        href: &'a str,
    },
}

impl<'a> Manifest<'a> {
    pub fn new(site: &'a SiteSettings, sidebars: &'a [ResolvedSidebar], router: &'a Router) -> Self {
        Self {
            title: &site.title,
            base_url: router.base_url(),
            repository: site.repository_url(),
            sidebars: sidebars
                .iter()
                .map(|sidebar| ManifestSidebar {
                    id: &sidebar.id,
                    items: nodes(&sidebar.items, router),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn nodes<'a>(items: &'a [NavigationNode], router: &Router) -> Vec<ManifestNode<'a>> {
    items
        .iter()
        .map(|node| match node {
            NavigationNode::Category {
                label,
                collapsible,
                collapsed,
                items,
            } => ManifestNode::Category {
                label,
                collapsible: *collapsible,
                collapsed: *collapsed,
                items: nodes(items, router),
            },
            NavigationNode::Leaf { id, label } => ManifestNode::Doc {
                id,
                label,
                href: router.doc_route(id),
            },
            NavigationNode::Link { label, href } => ManifestNode::Link { label, href },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_manifest_json() {
        let router = Router::new("/raven-thunder/", "/", Some(false));
        let sidebars = vec![ResolvedSidebar {
            id: "docs".into(),
            items: vec![
                NavigationNode::Leaf {
                    id: "index".into(),
                    label: "Introduction".into(),
                },
                NavigationNode::Category {
                    label: "Getting Started".into(),
                    collapsible: false,
                    collapsed: false,
                    items: vec![NavigationNode::Leaf {
                        id: "getting-started/overview".into(),
                        label: "Overview".into(),
                    }],
                },
                NavigationNode::Link {
                    label: "GitHub".into(),
                    href: "https://github.com/dream-horizon-org/thunder".into(),
                },
            ],
        }];

        let site = SiteSettings {
            title: "Raven Thunder".into(),
            organization_name: "dream-horizon-org".into(),
            project_name: "thunder".into(),
            ..SiteSettings::default()
        };
        let json = Manifest::new(&site, &sidebars, &router)
            .to_json()
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Raven Thunder",
                "base_url": "/raven-thunder/",
                "repository": "https://github.com/dream-horizon-org/thunder",
                "sidebars": [{
                    "id": "docs",
                    "items": [
                        { "type": "doc", "id": "index", "label": "Introduction", "href": "/raven-thunder/" },
                        {
                            "type": "category",
                            "label": "Getting Started",
                            "collapsible": false,
                            "collapsed": false,
                            "items": [{
                                "type": "doc",
                                "id": "getting-started/overview",
                                "label": "Overview",
                                "href": "/raven-thunder/getting-started/overview"
                            }]
                        },
                        { "type": "link", "label": "GitHub", "href": "https://github.com/dream-horizon-org/thunder" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_manifest_without_repository() {
        let router = Router::new("/", "/", None);
        let site = SiteSettings {
            title: "Docs".into(),
            ..SiteSettings::default()
        };
        let json = Manifest::new(&site, &[], &router).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("repository").is_none());
        assert_eq!(value["sidebars"], json!([]));
    }
}
