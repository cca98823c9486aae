//! Docs directory scanning.
//!
//! Files are discovered with `jwalk` and parsed in parallel. Each file yields
//! front matter fields, the first `#` heading and relative Markdown links.

use jwalk::WalkDir;
use pulldown_cmark::{
    Event, HeadingLevel, MetadataBlockKind, Options, Parser, Tag, TagEnd,
};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use super::Document;

const EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("docs directory `{0}` does not exist")]
    MissingDir(PathBuf),

    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] FrontMatterError),

    #[error("document id `{id}` is used by both `{}` and `{}`", first.display(), second.display())]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Parse failure of a `---` (YAML) or `+++` (TOML) block.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Front matter fields the navigation cares about. Other keys are ignored.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct FrontMatter {
    id: Option<String>,
    title: Option<String>,
    sidebar_label: Option<String>,
}

/// Scan every document below `dir`.
///
/// Files and directories below `dir` starting with `_` or `.` are skipped;
/// the name of `dir` itself does not matter.
pub(super) fn scan_dir(dir: &Path) -> Result<Vec<Document>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingDir(dir.to_path_buf()));
    }

    let files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_document(path) && !is_partial(path.strip_prefix(dir).unwrap_or(path)))
        .collect();

    crate::debug!("scan"; "found {} documents in {}", files.len(), dir.display());

    let docs = files
        .par_iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .map_err(|err| ScanError::Io(path.clone(), err))?;
            let relative = path.strip_prefix(dir).unwrap_or(path).to_path_buf();
            parse_document(relative, &content)
        })
        .collect::<Result<Vec<_>, _>>()?;

    check_unique(&docs)?;
    Ok(docs)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// Some component of the path below the docs directory starts with `_` or `.`.
fn is_partial(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with(['_', '.']),
        _ => false,
    })
}

fn check_unique(docs: &[Document]) -> Result<(), ScanError> {
    let mut seen: FxHashMap<&str, &Path> = FxHashMap::default();
    for doc in docs {
        if let Some(first) = seen.insert(doc.id.as_str(), doc.path.as_path()) {
            let (first, second) = if first < doc.path.as_path() {
                (first, doc.path.as_path())
            } else {
                (doc.path.as_path(), first)
            };
            return Err(ScanError::DuplicateId {
                id: doc.id.clone(),
                first: first.to_path_buf(),
                second: second.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Parse one document. `path` is relative to the docs directory.
pub(super) fn parse_document(path: PathBuf, content: &str) -> Result<Document, ScanError> {
    let options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
        | Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS;

    let mut front = FrontMatter::default();
    let mut metadata: Option<(MetadataBlockKind, String)> = None;
    let mut heading: Option<String> = None;
    let mut first_heading: Option<String> = None;
    let mut links = Vec::new();

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::MetadataBlock(kind)) => metadata = Some((kind, String::new())),
            Event::End(TagEnd::MetadataBlock(_)) => {
                if let Some((kind, block)) = metadata.take() {
                    front = parse_front_matter(kind, &block)
                        .map_err(|err| ScanError::FrontMatter(path.clone(), err))?;
                }
            }
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if first_heading.is_none() => heading = Some(String::new()),
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(text) = heading.take()
                    && !text.trim().is_empty()
                {
                    first_heading = Some(text.trim().to_owned());
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, block)) = &mut metadata {
                    block.push_str(&text);
                } else if let Some(h) = &mut heading {
                    h.push_str(&text);
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                if is_markdown_link(&dest_url) {
                    links.push(dest_url.into_string());
                }
            }
            _ => {}
        }
    }

    let id = document_id(&path, front.id.as_deref());
    Ok(Document {
        id,
        title: front.title.or(first_heading).filter(|t| !t.is_empty()),
        sidebar_label: front.sidebar_label,
        path,
        links,
    })
}

/// Relative link to another Markdown file (`../api/overview.md#auth`).
fn is_markdown_link(dest: &str) -> bool {
    if dest.starts_with('/') || dest.starts_with('#') || dest.contains("://") {
        return false;
    }
    if dest.starts_with("mailto:") {
        return false;
    }
    let path = dest.split(['#', '?']).next().unwrap_or_default();
    is_document(Path::new(path))
}

/// `getting-started/overview.md` → `getting-started/overview`.
///
/// An explicit front matter id replaces the file stem.
fn document_id(path: &Path, explicit: Option<&str>) -> String {
    let mut segments: Vec<String> = path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    segments.push(explicit.map(str::to_owned).unwrap_or(stem));
    segments.join("/")
}

fn parse_front_matter(kind: MetadataBlockKind, block: &str) -> Result<FrontMatter, FrontMatterError> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    Ok(match kind {
        MetadataBlockKind::YamlStyle => serde_yaml::from_str(block)?,
        MetadataBlockKind::PlusesStyle => toml::from_str(block)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(path: &str, content: &str) -> Document {
        parse_document(PathBuf::from(path), content).unwrap()
    }

    #[test]
    fn test_id_from_relative_path() {
        let doc = parse("getting-started/overview.md", "# Overview\n\nText.");
        assert_eq!(doc.id, "getting-started/overview");
        assert_eq!(doc.title.as_deref(), Some("Overview"));
        assert_eq!(doc.sidebar_label, None);
    }

    #[test]
    fn test_yaml_front_matter() {
        let doc = parse(
            "api/admin-contracts.mdx",
            "---\nid: admin-api\ntitle: \"Admin API Contracts\"\nsidebar_label: Admin API\n---\n\n# Heading\n",
        );
        assert_eq!(doc.id, "api/admin-api");
        assert_eq!(doc.title.as_deref(), Some("Admin API Contracts"));
        assert_eq!(doc.sidebar_label.as_deref(), Some("Admin API"));
    }

    #[test]
    fn test_toml_front_matter() {
        let doc = parse(
            "operations/docker.md",
            "+++\ntitle = \"Docker\"\nsidebar_label = \"Docker Compose\"\n+++\n\nBody\n",
        );
        assert_eq!(doc.id, "operations/docker");
        assert_eq!(doc.title.as_deref(), Some("Docker"));
        assert_eq!(doc.sidebar_label.as_deref(), Some("Docker Compose"));
    }

    #[test]
    fn test_heading_with_inline_code() {
        let doc = parse("api/overview.md", "Intro\n\n# The `thunder-api` module\n\n# Second\n");
        assert_eq!(doc.title.as_deref(), Some("The thunder-api module"));
    }

    #[test]
    fn test_collects_relative_markdown_links() {
        let doc = parse(
            "getting-started/overview.md",
            "See [quickstart](./quickstart.md), [API](../api/overview.mdx#auth), \
             [site](/raven-thunder/api/overview), [web](https://example.com/a.md) \
             and [anchor](#top).",
        );
        assert_eq!(doc.links, ["./quickstart.md", "../api/overview.mdx#auth"]);
    }

    #[test]
    fn test_scan_dir() {
        let dir = TempDir::new().unwrap();
        let docs = dir.path();
        fs::create_dir_all(docs.join("getting-started")).unwrap();
        fs::create_dir_all(docs.join("_partials")).unwrap();
        fs::write(docs.join("index.md"), "# Thunder").unwrap();
        fs::write(docs.join("getting-started/overview.md"), "# Overview").unwrap();
        fs::write(docs.join("getting-started/quickstart.mdx"), "# Quickstart").unwrap();
        fs::write(docs.join("getting-started/notes.txt"), "not a doc").unwrap();
        fs::write(docs.join("_partials/snippet.md"), "# Snippet").unwrap();

        let mut found = scan_dir(docs).unwrap();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        let ids: Vec<_> = found.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            ["getting-started/overview", "getting-started/quickstart", "index"]
        );
        assert_eq!(found[1].path, PathBuf::from("getting-started/quickstart.mdx"));
    }

    #[test]
    fn test_scan_duplicate_id() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "---\nid: shared\n---\n").unwrap();
        fs::write(dir.path().join("shared.md"), "# Shared").unwrap();

        let err = scan_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ScanError::DuplicateId { ref id, .. } if id == "shared"));
    }

    #[test]
    fn test_scan_underscore_root() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("_docs");
        fs::create_dir_all(docs.join(".drafts")).unwrap();
        fs::write(docs.join("overview.md"), "# Overview").unwrap();
        fs::write(docs.join("quickstart.md"), "# Quickstart").unwrap();
        fs::write(docs.join(".drafts/wip.md"), "# WIP").unwrap();

        let found = scan_dir(&docs).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_yaml_nested_keys_and_escapes() {
        let doc = parse(
            "api/admin.md",
            "---\ntitle: \"The \\\"Admin\\\" API\"\nsidebar_label: Admin # short\nseo:\n  title: Buy now\ntags: [api]\n---\n",
        );
        assert_eq!(doc.title.as_deref(), Some("The \"Admin\" API"));
        assert_eq!(doc.sidebar_label.as_deref(), Some("Admin"));
    }

    #[test]
    fn test_invalid_yaml_front_matter() {
        let err = parse_document(PathBuf::from("bad.md"), "---\ntitle: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, ScanError::FrontMatter(_, FrontMatterError::Yaml(_))));
    }

    #[test]
    fn test_empty_heading_does_not_hide_next() {
        let doc = parse("a.md", "#\n\n# Real title\n");
        assert_eq!(doc.title.as_deref(), Some("Real title"));
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = scan_dir(&dir.path().join("docs")).unwrap_err();
        assert!(matches!(err, ScanError::MissingDir(_)));
    }
}
