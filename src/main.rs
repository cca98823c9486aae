//! thunder-docs - configuration resolver and landing page builder for a
//! Markdown documentation site.

mod cli;
mod config;
mod docs;
mod embed;
mod generator;
mod landing;
mod links;
mod logger;
mod nav;
mod route;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name } => cli::init::new_site(&config, name.is_some()),
        Commands::Check { .. } => cli::check::check_site(&config),
        Commands::Build { .. } => cli::build::build_site(&config),
    }
}
