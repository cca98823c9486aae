//! Broken link report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A link whose target doesn't exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// The link as written.
    pub target: String,
    /// Why it is broken.
    pub reason: String,
}

/// Broken links grouped by where they were written (config field or document).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkReport {
    pub sources: BTreeMap<String, Vec<BrokenLink>>,
}

impl LinkReport {
    pub fn add(&mut self, source: impl Into<String>, target: impl Into<String>, reason: impl Into<String>) {
        self.sources.entry(source.into()).or_default().push(BrokenLink {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total broken link count.
    pub fn error_count(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    /// Print the report to stderr under a section header.
    pub fn print(&self, name: &str) {
        if self.is_empty() {
            return;
        }
        eprintln!();
        let source_count = self.sources.len();
        let error_count = self.error_count();
        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({source_count} source{}, {error_count} broken link{})",
                plural_s(source_count),
                plural_s(error_count)
            )
            .dimmed()
        );
        for (source, links) in &self.sources {
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for link in links {
                eprintln!("{} `{}` {}", "→".red(), link.target, link.reason);
            }
        }
    }
}

/// Plain listing used in error messages: one `source → target (reason)` per line.
impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (source, links) in &self.sources {
            for link in links {
                writeln!(f, "- {source} → `{}` ({})", link.target, link.reason)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_groups_by_source() {
        let mut report = LinkReport::default();
        report.add("theme.footer.links[0].items[0]", "/raven-thunder/missing", "no such page");
        report.add("getting-started/overview.md", "./quickstart.md", "no such document");
        report.add("getting-started/overview.md", "../api/x.md", "no such document");

        assert_eq!(report.sources.len(), 2);
        assert_eq!(report.error_count(), 3);

        let listing = report.to_string();
        // BTreeMap order: documents before `theme.*`
        assert!(listing.starts_with("- getting-started/overview.md → `./quickstart.md`"));
        assert!(listing.contains("theme.footer.links[0].items[0] → `/raven-thunder/missing`"));
    }
}
