//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"           # Output directory (relative to site root)
//! minify = true               # Strip indentation from generated XML
//!
//! [build.sitemap]
//! enable = true               # Generate sitemap.xml
//! path = "sitemap.xml"        # Relative to the output directory
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util::normalize_path};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// Minify generated XML.
    pub minify: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            minify: true,
            clean: false,
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate build configuration against the project root.
    ///
    /// `--clean` removes the output directory, so it must sit strictly
    /// inside or beside the root, never on the root or above it.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        let output = normalize_path(&root.join(&self.output));
        if normalize_path(root).starts_with(&output) {
            diag.error_with_hint(
                FieldPath::new("build.output"),
                format!("'{}' would contain the project root", self.output.display()),
                "use a subdirectory like public",
            );
        }

        let path = &self.sitemap.path;
        if path.is_absolute() || path.file_name().is_none() {
            diag.error_with_hint(
                FieldPath::new("build.sitemap.path"),
                format!("'{}' is not a relative file path", path.display()),
                "use a file name like sitemap.xml",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_custom_build() {
        let config = test_parse_config(
            r#"
[build]
output = "dist"
minify = false

[build.sitemap]
enable = false
"#,
        );
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
    }

    #[test]
    fn test_validate_sitemap_path() {
        let mut build = BuildSectionConfig::default();
        build.sitemap.path = PathBuf::from("/etc/sitemap.xml");

        let mut diag = ConfigDiagnostics::new();
        build.validate(Path::new("/srv/site"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "build.sitemap.path");
    }

    #[test]
    fn test_validate_output_outside_root() {
        let root = Path::new("/srv/site");
        for ok in ["public", "dist/site", "../site-public", "/var/www/typingstories"] {
            let build = BuildSectionConfig {
                output: PathBuf::from(ok),
                ..BuildSectionConfig::default()
            };
            let mut diag = ConfigDiagnostics::new();
            build.validate(root, &mut diag);
            assert!(diag.is_empty(), "{ok}");
        }
    }

    #[test]
    fn test_validate_output_covering_root() {
        let root = Path::new("/srv/site");
        for bad in ["", ".", "./", "..", "../..", "/srv/site", "/srv", "public/.."] {
            let build = BuildSectionConfig {
                output: PathBuf::from(bad),
                ..BuildSectionConfig::default()
            };
            let mut diag = ConfigDiagnostics::new();
            build.validate(root, &mut diag);
            assert_eq!(diag.len(), 1, "{bad:?}");
            assert_eq!(diag.errors()[0].field.as_str(), "build.output");
        }
    }
}
