//! `[theme.footer]` configuration.

use serde::{Deserialize, Serialize};

use super::{Target, validate_target};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,

    /// Link columns, in display order.
    pub links: Vec<FooterGroup>,

    /// Copyright line rendered under the links.
    pub copyright: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

impl FooterStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub to: Option<String>,
    pub href: Option<String>,
}

impl FooterLink {
    pub fn target(&self) -> Option<Target<'_>> {
        Target::from_fields(self.to.as_deref(), self.href.as_deref())
    }
}

impl FooterConfig {
    pub const LINKS: FieldPath = FieldPath::new("theme.footer.links");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, group) in self.links.iter().enumerate() {
            let group_field = Self::LINKS.index(i);
            if group.title.trim().is_empty() {
                diag.error(group_field.child("title"), "footer group title must not be empty");
            } else if self.links[..i].iter().any(|g| g.title == group.title) {
                diag.error(
                    group_field.child("title"),
                    format!("footer group `{}` is defined twice", group.title),
                );
            }

            for (j, link) in group.items.iter().enumerate() {
                let field = group_field.child("items").index(j);
                if link.label.trim().is_empty() {
                    diag.error(field.child("label"), "footer link label must not be empty");
                }
                validate_target(link.to.as_deref(), link.href.as_deref(), &field, diag);
            }
        }
    }

    pub fn targets(&self) -> Vec<(FieldPath, Target<'_>)> {
        let mut targets = Vec::new();
        for (i, group) in self.links.iter().enumerate() {
            for (j, link) in group.items.iter().enumerate() {
                if let Some(target) = link.target() {
                    targets.push((Self::LINKS.index(i).child("items").index(j), target));
                }
            }
        }
        targets
    }
}
