//! Output artifacts.
//!
//! - **Page**: HTML shell (head, navbar, footer) around a rendered body
//! - **Manifest**: resolved sidebars with routes (`navigation.json`)
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod manifest;
pub mod page;
pub mod sitemap;

pub use manifest::Manifest;
pub use page::{PageMeta, compose_page};
pub use sitemap::Sitemap;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write `content` to `path`, creating parent directories.
pub fn write_output(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
