//! Configuration section definitions.
//!
//! Each module corresponds to a section in `typingstories.toml`:
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `build` | `[build]`    | Output directory, minify, sitemap    |
//! | `serve` | `[serve]`    | Preview server                       |
//! | `site`  | `[site]`     | Product name, SEO metadata, locale   |

pub mod build;
mod serve;
pub mod site;

pub use build::BuildSectionConfig;
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
