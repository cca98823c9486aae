//! Broken link detection.
//!
//! Two independent checks, each governed by its own [`BrokenLinkPolicy`]:
//!
//! - site links: internal `to` targets in navbar, footer and hero buttons
//!   must hit the landing page or a document route (`site.on_broken_links`)
//! - markdown links: relative `.md`/`.mdx` links between documents must
//!   resolve to a scanned document (`site.on_broken_markdown_links`)

mod report;

pub use report::{BrokenLink, LinkReport};

use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Component, Path};
use thiserror::Error;

use crate::config::{BrokenLinkPolicy, SiteConfig, Target};
use crate::docs::DocumentCollection;
use crate::route::Router;
use crate::utils::plural_s;
use crate::{debug, log};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Site,
    Markdown,
}

impl LinkKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broken links found under the `throw` policy.
#[derive(Debug, Error)]
#[error(
    "{} broken {kind} link{}:\n{report}",
    .report.error_count(),
    plural_s(.report.error_count())
)]
pub struct LinkCheckError {
    pub kind: LinkKind,
    pub report: LinkReport,
}

/// Run both checks and apply the configured policies.
pub fn check_links(
    config: &SiteConfig,
    docs: &impl DocumentCollection,
) -> Result<(), LinkCheckError> {
    let router = config.router();
    enforce(
        config.site.on_broken_links,
        LinkKind::Site,
        site_links(config, &router, docs),
    )?;
    enforce(
        config.site.on_broken_markdown_links,
        LinkKind::Markdown,
        markdown_links(docs),
    )
}

/// Check internal targets of navbar, footer and hero buttons.
pub fn site_links(
    config: &SiteConfig,
    router: &Router,
    docs: &impl DocumentCollection,
) -> LinkReport {
    let mut known: FxHashSet<String> = docs
        .documents()
        .iter()
        .map(|doc| router.normalize(&router.doc_route(&doc.id)))
        .collect();
    known.insert(router.normalize(&router.landing_route()));

    let mut report = LinkReport::default();
    let targets = config
        .theme
        .targets()
        .into_iter()
        .chain(config.landing.targets());

    for (field, target) in targets {
        let Target::Internal(path) = target else {
            continue;
        };
        let normalized = router.normalize(path);
        if !normalized.starts_with(router.base_url()) && format!("{normalized}/") != router.base_url()
        {
            report.add(
                field.as_str(),
                path,
                format!("outside the base path `{}`", router.base_url()),
            );
        } else if !known.contains(&normalized) {
            report.add(field.as_str(), path, "no page has this route");
        }
    }
    report
}

/// Check relative Markdown links between documents.
pub fn markdown_links(docs: &impl DocumentCollection) -> LinkReport {
    let known: FxHashSet<String> = docs
        .documents()
        .iter()
        .map(|doc| slash_path(&doc.path))
        .collect();

    let mut report = LinkReport::default();
    for doc in docs.documents() {
        let source = slash_path(&doc.path);
        for link in &doc.links {
            let file = link.split(['#', '?']).next().unwrap_or_default();
            match resolve_relative(&source, file) {
                Some(path) if known.contains(&path) => {}
                Some(_) => report.add(&source, link, "no such document"),
                None => report.add(&source, link, "points outside the docs directory"),
            }
        }
    }
    report
}

/// Apply `policy` to a finished report.
pub fn enforce(
    policy: BrokenLinkPolicy,
    kind: LinkKind,
    report: LinkReport,
) -> Result<(), LinkCheckError> {
    if report.is_empty() {
        return Ok(());
    }
    let count = report.error_count();
    match policy {
        BrokenLinkPolicy::Throw => Err(LinkCheckError { kind, report }),
        BrokenLinkPolicy::Warn => {
            log!("warning"; "found {} broken {} link{}", count, kind, plural_s(count));
            report.print(&format!("{kind} links"));
            Ok(())
        }
        BrokenLinkPolicy::Ignore => {
            debug!("links"; "ignoring {} broken {} link{}", count, kind, plural_s(count));
            Ok(())
        }
    }
}

/// `getting-started/overview.md` with `../api/x.md` → `api/x.md`.
///
/// `None` when the link climbs above the docs directory.
fn resolve_relative(from: &str, link: &str) -> Option<String> {
    let mut segments: Vec<&str> = from.split('/').collect();
    segments.pop();
    for part in link.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            part => segments.push(part),
        }
    }
    Some(segments.join("/"))
}

/// Path with `/` separators on every platform.
fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
