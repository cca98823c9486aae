//! Starter files for a new site.
//!
//! The generated site passes `thunder-docs check` as written: every
//! internal link in `site.toml` points at one of the starter documents.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

const SIDEBARS_JSON: &str = r#"{
  "docs": [
    "index",
    {
      "type": "category",
      "label": "Getting Started",
      "collapsed": false,
      "items": ["getting-started/overview"]
    }
  ]
}
"#;

const INDEX_MD: &str = "---
sidebar_label: Introduction
---

# Introduction

Start with the [overview](getting-started/overview.md).
";

const OVERVIEW_MD: &str = "# Overview

Describe what the project does and how to install it.
";

/// Write the config, sidebars, starter documents and ignore file into `root`.
pub fn write_site(root: &Path) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;

    let title = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Documentation".to_owned());

    write(root, CONFIG_FILE, &config_template(&title))?;
    write(root, "sidebars.json", SIDEBARS_JSON)?;
    write(root, "docs/index.md", INDEX_MD)?;
    write(root, "docs/getting-started/overview.md", OVERVIEW_MD)?;
    write(root, ".gitignore", "/build\n")?;
    Ok(())
}

/// `site.toml` for a site called `title`.
pub fn config_template(title: &str) -> String {
    let title = toml::Value::String(title.to_owned());
    format!(
        r#"# thunder-docs configuration file (v{version})

[site]
title = {title}
tagline = "Project documentation"
# url = "https://example.github.io"
base_url = "/"
on_broken_links = "throw"
on_broken_markdown_links = "warn"

[docs]
path = "docs"
sidebar_path = "sidebars.json"

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "docs"
label = "Docs"

[[theme.footer.links]]
title = "Docs"
items = [{{ label = "Overview", to = "/getting-started/overview" }}]

[landing]
description = "Project documentation"
platform = []

[landing.hero]
buttons = [{{ label = "Get Started", to = "/getting-started/overview", primary = true }}]

[[landing.features]]
emoji = "📝"
title = "Markdown"
description = "Documents live in docs/ and are listed in sidebars.json."

[build]
output = "build"

[build.sitemap]
enable = false  # needs site.url
"#,
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn write(root: &Path, rel: &str, content: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}
