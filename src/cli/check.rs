//! `check` command: validate without writing output.

use anyhow::Result;

use super::common::resolve_site;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

pub fn check_site(config: &SiteConfig) -> Result<()> {
    let site = resolve_site(config)?;

    log!(
        "check";
        "{} and {} ok",
        plural_count(site.docs.len(), "document"),
        plural_count(site.sidebars.len(), "sidebar")
    );
    Ok(())
}
