//! `[theme.navbar]` configuration.

use serde::{Deserialize, Serialize};

use super::{Target, validate_target};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Text next to the logo. Falls back to `site.title`.
    pub title: Option<String>,

    /// Logo image.
    pub logo: Option<Logo>,

    /// Navbar entries, in display order.
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub alt: String,
    /// Image path, relative to `site.base_url`.
    pub src: String,
}

/// A navbar entry, selected by its `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavbarItem {
    /// Links to the first document of a sidebar.
    DocSidebar(DocSidebarItem),
    /// Plain link.
    Link(NavbarLink),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocSidebarItem {
    pub sidebar_id: String,
    pub label: String,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavbarLink {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl NavbarItem {
    pub fn label(&self) -> &str {
        match self {
            Self::DocSidebar(item) => &item.label,
            Self::Link(link) => &link.label,
        }
    }

    pub const fn position(&self) -> Position {
        match self {
            Self::DocSidebar(item) => item.position,
            Self::Link(link) => link.position,
        }
    }
}

impl NavbarConfig {
    pub const ITEMS: FieldPath = FieldPath::new("theme.navbar.items");
    pub const LOGO_SRC: FieldPath = FieldPath::new("theme.navbar.logo.src");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && (logo.src.is_empty() || logo.src.starts_with('/'))
        {
            diag.error(
                Self::LOGO_SRC,
                format!("`{}` must be a path relative to site.base_url", logo.src),
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            let field = Self::ITEMS.index(i);
            if item.label().trim().is_empty() {
                diag.error(field.child("label"), "navbar label must not be empty");
            }
            match item {
                NavbarItem::DocSidebar(doc) if doc.sidebar_id.is_empty() => {
                    diag.error(field.child("sidebar_id"), "sidebar id must not be empty");
                }
                NavbarItem::DocSidebar(_) => {}
                NavbarItem::Link(link) => {
                    validate_target(link.to.as_deref(), link.href.as_deref(), &field, diag)
                }
            }
        }
    }

    /// Check that every `doc_sidebar` item names an existing sidebar.
    pub fn validate_sidebar_refs<'a>(
        &self,
        sidebar_ids: impl IntoIterator<Item = &'a str> + Clone,
        diag: &mut ConfigDiagnostics,
    ) {
        for (i, item) in self.items.iter().enumerate() {
            if let NavbarItem::DocSidebar(doc) = item
                && !sidebar_ids.clone().into_iter().any(|id| id == doc.sidebar_id)
            {
                let known: Vec<_> = sidebar_ids.clone().into_iter().collect();
                diag.error_with_hint(
                    Self::ITEMS.index(i).child("sidebar_id"),
                    format!("sidebar `{}` is not defined", doc.sidebar_id),
                    format!("defined sidebars: {}", known.join(", ")),
                );
            }
        }
    }

    pub fn targets(&self) -> Vec<(FieldPath, Target<'_>)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                NavbarItem::Link(link) => {
                    Target::from_fields(link.to.as_deref(), link.href.as_deref())
                        .map(|target| (Self::ITEMS.index(i), target))
                }
                NavbarItem::DocSidebar(_) => None,
            })
            .collect()
    }
}
