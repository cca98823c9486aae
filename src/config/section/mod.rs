//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `build`   | `[build]`    | Output directory, manifest, sitemap      |
//! | `docs`    | `[docs]`     | Documents directory, routes, sidebars    |
//! | `landing` | `[landing]`  | Hero, feature cards, platform links      |
//! | `site`    | `[site]`     | Identity, base path, locales, policies   |
//! | `theme`   | `[theme]`    | Navbar, footer, color mode               |

pub mod build;
mod docs;
pub mod landing;
pub mod site;
pub mod theme;

pub use build::{BuildSectionConfig, SitemapConfig};
pub use docs::DocsConfig;
pub use landing::{FeatureCard, HeroButton, HeroConfig, LandingConfig, PlatformComponent};
pub use site::{BrokenLinkPolicy, I18nConfig, SiteSettings};
pub use theme::{Target, ThemeConfig};
