//! Navigation tree building.
//!
//! Turns parsed [`Sidebars`] into [`NavigationNode`] trees, resolving each
//! doc leaf through a [`DocumentCollection`]. Declaration order is rendering
//! order and is kept as is.

mod sidebars;

pub use sidebars::{CategoryItem, DocItem, LinkItem, SidebarItem, Sidebars};

use serde::Serialize;
use thiserror::Error;

use crate::config::section::theme::validate_external;
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::docs::{DocumentCollection, UnknownDocumentError};

/// A resolved sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavigationNode {
    Category {
        label: String,
        collapsible: bool,
        collapsed: bool,
        items: Vec<NavigationNode>,
    },
    /// Reference to a document.
    Leaf { id: String, label: String },
    /// External link.
    Link { label: String, href: String },
}

impl NavigationNode {
    pub fn label(&self) -> &str {
        match self {
            Self::Category { label, .. } | Self::Leaf { label, .. } | Self::Link { label, .. } => {
                label
            }
        }
    }

    /// First document leaf in depth-first order.
    pub fn first_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf { id, .. } => Some(id),
            Self::Category { items, .. } => items.iter().find_map(Self::first_leaf),
            Self::Link { .. } => None,
        }
    }

    /// Document ids below this node, in order.
    pub fn leaf_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_leaves(&mut ids);
        ids
    }

    fn collect_leaves<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            Self::Leaf { id, .. } => ids.push(id),
            Self::Category { items, .. } => items.iter().for_each(|n| n.collect_leaves(ids)),
            Self::Link { .. } => {}
        }
    }
}

#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    UnknownDocument(#[from] UnknownDocumentError),
}

/// A named, resolved sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSidebar {
    pub id: String,
    pub items: Vec<NavigationNode>,
}

impl ResolvedSidebar {
    /// Target of a navbar `doc_sidebar` item.
    pub fn first_doc(&self) -> Option<&str> {
        self.items.iter().find_map(NavigationNode::first_leaf)
    }
}

/// Resolve one sidebar.
///
/// Fails with the collection's [`UnknownDocumentError`] for the first leaf
/// it can't resolve. Structural problems (empty or duplicate category labels,
/// empty categories, bad links) are collected and reported together.
pub fn build_sidebar(
    items: &[SidebarItem],
    docs: &impl DocumentCollection,
) -> Result<Vec<NavigationNode>, NavError> {
    build_at(FieldPath::new("sidebar"), items, docs)
}

/// Resolve every sidebar, in file order.
pub fn build_sidebars(
    sidebars: &Sidebars,
    docs: &impl DocumentCollection,
) -> Result<Vec<ResolvedSidebar>, NavError> {
    sidebars
        .iter()
        .map(|(id, items)| {
            let items = build_at(FieldPath::new("sidebars").child(id), items, docs)?;
            crate::debug!("nav"; "sidebar `{}`: {} top-level items", id, items.len());
            Ok(ResolvedSidebar {
                id: id.to_owned(),
                items,
            })
        })
        .collect()
}

fn build_at(
    root: FieldPath,
    items: &[SidebarItem],
    docs: &impl DocumentCollection,
) -> Result<Vec<NavigationNode>, NavError> {
    let mut diag = ConfigDiagnostics::new();
    let nodes = build_level(&root, items, docs, &mut diag)?;
    diag.into_result()
        .map_err(|diag| NavError::Config(ConfigError::Diagnostics(diag)))?;
    Ok(nodes)
}

fn build_level(
    field: &FieldPath,
    items: &[SidebarItem],
    docs: &impl DocumentCollection,
    diag: &mut ConfigDiagnostics,
) -> Result<Vec<NavigationNode>, UnknownDocumentError> {
    let mut nodes = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let field = field.index(i);
        let node = match item {
            SidebarItem::Doc(doc) => {
                let document = docs.resolve(&doc.id)?;
                let label = doc.label.as_deref().unwrap_or_else(|| document.label());
                NavigationNode::Leaf {
                    id: document.id.clone(),
                    label: label.to_owned(),
                }
            }
            SidebarItem::Category(category) => {
                check_category(&field, category, &items[..i], diag);
                let children = build_level(&field.child("items"), &category.items, docs, diag)?;
                let collapsible = category.collapsible.unwrap_or(true);
                NavigationNode::Category {
                    label: category.label.clone(),
                    collapsible,
                    // A category that can't collapse is always open
                    collapsed: collapsible && category.collapsed.unwrap_or(true),
                    items: children,
                }
            }
            SidebarItem::Link(link) => {
                if link.label.trim().is_empty() {
                    diag.error(field.child("label"), "link label must not be empty");
                }
                validate_external(&link.href, field.child("href"), diag);
                NavigationNode::Link {
                    label: link.label.clone(),
                    href: link.href.clone(),
                }
            }
        };
        nodes.push(node);
    }

    Ok(nodes)
}

fn check_category(
    field: &FieldPath,
    category: &CategoryItem,
    previous: &[SidebarItem],
    diag: &mut ConfigDiagnostics,
) {
    let label = category.label.trim();
    if label.is_empty() {
        diag.error(field.child("label"), "category label must not be empty");
    } else if previous
        .iter()
        .any(|item| matches!(item, SidebarItem::Category(c) if c.label.trim() == label))
    {
        diag.error_with_hint(
            field.child("label"),
            format!("category `{label}` appears twice at the same level"),
            "merge the two categories or rename one",
        );
    }
    if category.items.is_empty() {
        diag.error(field.child("items"), format!("category `{label}` has no items"));
    }
}
