//! Target directory checks before scaffolding.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `init` puts the new site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `thunder-docs init`: the current directory, which must hold nothing
    /// but version-control metadata
    CurrentDir,
    /// `thunder-docs init <name>`: a new directory, which must not exist
    NewDir,
}

/// Entries a fresh repository may already contain.
const ALLOWED_ENTRIES: &[&str] = &[".git"];

pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if let Some(entry) = first_blocking_entry(root)? {
                bail!(
                    "current directory already contains `{entry}`; \
                     run `thunder-docs init <name>` to create the site in a new directory"
                );
            }
        }
        InitMode::NewDir if root.exists() => {
            bail!(
                "'{}' already exists; choose another name or remove it",
                root.display()
            );
        }
        InitMode::NewDir => {}
    }
    Ok(())
}

/// First entry of `dir` that `init` would clash with.
fn first_blocking_entry(dir: &Path) -> Result<Option<String>> {
    if !dir.exists() {
        return Ok(None);
    }
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory '{}'", dir.display()))?;
    for entry in entries {
        let name = entry
            .with_context(|| format!("Failed to read directory '{}'", dir.display()))?
            .file_name()
            .to_string_lossy()
            .into_owned();
        if !ALLOWED_ENTRIES.contains(&name.as_str()) {
            return Ok(Some(name));
        }
    }
    Ok(None)
}
