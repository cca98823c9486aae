//! Site initialization module.
//!
//! - [`validate`]: Pre-initialization validation
//! - [`scaffold`]: Config, sidebars and starter documents

mod scaffold;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site in the config's root directory.
///
/// `has_name` selects between initializing the current directory (which
/// must be empty) and creating a new one (which must not exist).
pub fn new_site(site_config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, mode)?;
    scaffold::write_site(root)?;

    log!("init"; "site initialized in {}", root.display());
    log!("init"; "run `thunder-docs check` inside it to validate");
    Ok(())
}
