//! Sidebar file parsing (`sidebars.json`).
//!
//! ```json
//! {
//!   "docs": [
//!     "index",
//!     {
//!       "type": "category",
//!       "label": "Getting Started",
//!       "collapsible": false,
//!       "items": ["getting-started/overview", "getting-started/quickstart"]
//!     },
//!     { "type": "link", "label": "GitHub", "href": "https://github.com/dream-horizon-org/thunder" }
//!   ]
//! }
//! ```

use rustc_hash::FxHashSet;
use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::path::Path;

use crate::config::ConfigError;

/// Sidebar definitions, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebars {
    entries: Vec<(String, Vec<SidebarItem>)>,
}

/// One entry of a sidebar as written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    Doc(DocItem),
    Category(CategoryItem),
    Link(LinkItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocItem {
    pub id: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryItem {
    pub label: String,
    pub items: Vec<SidebarItem>,
    pub collapsible: Option<bool>,
    pub collapsed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

/// Object form, dispatched on `type`.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Tagged {
    Doc(DocItem),
    Category(CategoryItem),
    Link(LinkItem),
}

impl<'de> Deserialize<'de> for SidebarItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            // "getting-started/overview" is shorthand for a doc item
            Value::String(id) => Ok(Self::Doc(DocItem { id, label: None })),
            value @ Value::Object(_) => {
                let tagged = Tagged::deserialize(value).map_err(D::Error::custom)?;
                Ok(match tagged {
                    Tagged::Doc(doc) => Self::Doc(doc),
                    Tagged::Category(category) => Self::Category(category),
                    Tagged::Link(link) => Self::Link(link),
                })
            }
            other => Err(D::Error::custom(format!(
                "expected a document id or an object with `type`, found `{other}`"
            ))),
        }
    }
}

impl SidebarItem {
    /// Shorthand doc item.
    pub fn doc(id: &str) -> Self {
        Self::Doc(DocItem {
            id: id.to_owned(),
            label: None,
        })
    }

    /// Category with default collapse behavior.
    pub fn category(label: &str, items: Vec<SidebarItem>) -> Self {
        Self::Category(CategoryItem {
            label: label.to_owned(),
            items,
            collapsible: None,
            collapsed: None,
        })
    }
}

impl Sidebars {
    /// Read and parse the sidebar file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse(&content, path)
    }

    /// Parse sidebar JSON that didn't come from a file.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new("sidebars.json"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let RawSidebars(raw) = serde_json::from_str(content)
            .map_err(|err| ConfigError::Json(path.to_path_buf(), err))?;

        let entries = raw
            .into_iter()
            .map(|(id, value)| {
                let items = Vec::<SidebarItem>::deserialize(value).map_err(|err| {
                    ConfigError::Validation(format!(
                        "sidebar `{id}` in `{}`: {err}",
                        path.display()
                    ))
                })?;
                Ok((id, items))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&[SidebarItem]> {
        self.entries
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, items)| items.as_slice())
    }

    /// Sidebar ids in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + Clone {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarItem])> {
        self.entries
            .iter()
            .map(|(id, items)| (id.as_str(), items.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Top-level object of the sidebar file, in file order. Repeated ids are an error.
struct RawSidebars(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawSidebars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawSidebars;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping sidebar ids to item arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawSidebars, A::Error> {
                let mut seen = FxHashSet::default();
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, value)) = map.next_entry::<String, Value>()? {
                    if !seen.insert(id.clone()) {
                        return Err(A::Error::custom(format!("duplicate sidebar id `{id}`")));
                    }
                    entries.push((id, value));
                }
                Ok(RawSidebars(entries))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THUNDER: &str = r#"{
  "docs": [
    "index",
    {
      "type": "category",
      "label": "Getting Started",
      "collapsible": false,
      "items": ["getting-started/overview", "getting-started/quickstart"]
    },
    {
      "type": "category",
      "label": "API",
      "items": [
        "api/overview",
        { "type": "doc", "id": "api/thunder-api-contracts", "label": "Contracts" }
      ]
    },
    { "type": "link", "label": "GitHub", "href": "https://github.com/dream-horizon-org/thunder" }
  ],
  "admin": ["admin/overview"]
}"#;

    #[test]
    fn test_parse_preserves_order() {
        let sidebars = Sidebars::from_json(THUNDER).unwrap();
        assert_eq!(sidebars.ids().collect::<Vec<_>>(), ["docs", "admin"]);

        let docs = sidebars.get("docs").unwrap();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[0], SidebarItem::doc("index"));

        let SidebarItem::Category(getting_started) = &docs[1] else {
            panic!("expected category");
        };
        assert_eq!(getting_started.label, "Getting Started");
        assert_eq!(getting_started.collapsible, Some(false));
        assert_eq!(
            getting_started.items,
            [
                SidebarItem::doc("getting-started/overview"),
                SidebarItem::doc("getting-started/quickstart")
            ]
        );

        let SidebarItem::Category(api) = &docs[2] else {
            panic!("expected category");
        };
        assert_eq!(
            api.items[1],
            SidebarItem::Doc(DocItem {
                id: "api/thunder-api-contracts".into(),
                label: Some("Contracts".into()),
            })
        );
        assert!(matches!(&docs[3], SidebarItem::Link(link) if link.label == "GitHub"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Sidebars::from_json(
            r#"{"docs": [{"type": "category", "label": "API", "items": [], "colapsed": true}]}"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sidebar `docs`"), "{message}");
        assert!(message.contains("colapsed"), "{message}");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err =
            Sidebars::from_json(r#"{"docs": [{"type": "autogenerated", "dirName": "."}]}"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_non_object_root_rejected() {
        let err = Sidebars::from_json(r#"["index"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(..)));

        let err = Sidebars::from_json(r#"{"docs": ["index"], "api": [], "docs": ["other"]}"#)
            .unwrap_err();
        let ConfigError::Json(_, source) = err else {
            panic!("expected a JSON error");
        };
        assert!(source.to_string().contains("duplicate sidebar id `docs`"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sidebars.json");
        std::fs::write(&path, THUNDER).unwrap();
        assert_eq!(Sidebars::load(&path).unwrap(), Sidebars::from_json(THUNDER).unwrap());
    }
}
