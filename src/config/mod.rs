//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── docs       # [docs]
//! │   ├── landing    # [landing]
//! │   ├── site/      # [site], [site.i18n], broken-link policy
//! │   └── theme/     # [theme.navbar], [theme.footer], [theme.color_mode]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Unknown keys anywhere in `site.toml` are rejected rather than ignored, so
//! a typo never silently falls back to a default.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BrokenLinkPolicy, BuildSectionConfig, DocsConfig, FeatureCard, I18nConfig, LandingConfig,
    PlatformComponent, SiteSettings, Target, ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    route::Router,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity and policies
    pub site: SiteSettings,

    /// Documents and sidebar locations
    pub docs: DocsConfig,

    /// Navbar, footer, color mode
    pub theme: ThemeConfig,

    /// Landing page content
    pub landing: LandingConfig,

    /// Output settings
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file; its parent directory becomes the project root.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if cli.is_init() {
            let mut config = Self::default();
            config.config_path = config_path;
            config.finalize(cli);
            return Ok(config);
        }

        if !exists {
            anyhow::bail!(
                "config file '{}' not found, run 'thunder-docs init' to create a new site",
                cli.config.display()
            );
        }

        let mut config = Self::from_path(&config_path)?;
        config.validate_paths()?;
        config.config_path = config_path;
        config.finalize(cli);
        Ok(config.resolve()?)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> anyhow::Result<(PathBuf, bool)> {
        use anyhow::Context;

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name) } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Set the root, make paths absolute and apply CLI overrides.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.normalize_paths(&root);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string, rejecting unknown fields.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            return Err(ConfigError::UnknownFields {
                file: "site.toml".into(),
                fields: ignored,
            });
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            let file = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            return Err(ConfigError::UnknownFields {
                file,
                fields: ignored,
            });
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Route builder for this site's base path and trailing-slash policy.
    pub fn router(&self) -> Router {
        Router::new(
            &self.site.base_url,
            self.docs.route_segment(),
            self.site.trailing_slash,
        )
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Check { verbose } => crate::logger::set_verbose(*verbose),
            Commands::Init { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
        if let Some(output) = &args.output {
            self.build.output = normalize_path(&self.root.join(output));
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.root = root.clone();
        self.config_path = normalize_path(&self.config_path);

        self.docs.path = normalize_path(&root.join(&self.docs.path));
        self.docs.sidebar_path = normalize_path(&root.join(&self.docs.sidebar_path));
        self.build.output = normalize_path(&root.join(&self.build.output));
        // Note: build.manifest and build.sitemap.path stay relative to output.
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Normalization turns every path absolute, which would hide a user
    /// writing an absolute path in the config.
    fn validate_paths(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.docs.validate_paths(&mut diag);
        self.build.validate_paths(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Validate every section and return the configuration unchanged.
    ///
    /// Site settings go through [`SiteSettings::resolve`]; their errors are
    /// listed first, followed by those of the remaining sections.
    pub fn resolve(self) -> Result<Self, ConfigError> {
        let Self {
            config_path,
            root,
            site,
            docs,
            theme,
            landing,
            build,
        } = self;

        let mut diag = ConfigDiagnostics::new();
        docs.validate(&mut diag);
        theme.validate(&mut diag);
        landing.validate(&mut diag);
        build.validate(&site, &mut diag);

        let site = match site.resolve() {
            Ok(site) => site,
            Err(ConfigError::Diagnostics(mut site_diag)) => {
                site_diag.merge(diag);
                return Err(ConfigError::Diagnostics(site_diag));
            }
            Err(e) => return Err(e),
        };
        diag.finish()?;

        Ok(Self {
            config_path,
            root,
            site,
            docs,
            theme,
            landing,
            build,
        })
    }
}

/// Make a path absolute and lexically clean (`.` and `..` removed).
pub fn normalize_path(path: &Path) -> PathBuf {
    use std::path::Component;

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ntagline = \"Test\"\n{extra}");
    SiteConfig::from_str(&config).unwrap()
}
