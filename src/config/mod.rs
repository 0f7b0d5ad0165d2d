//! Site configuration management for `typingstories.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── serve      # [serve]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional. Without one, every field takes the
//! TypingStories defaults and the current directory becomes the site root.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, with_trailing_slash};

pub use section::{BuildSectionConfig, ServeConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing typingstories.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Product name, SEO metadata, locale
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. When none is found the
    /// defaults are used and the cwd becomes the project root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, config_path) = match find_config_file(&cli.config) {
            Some(path) => (Self::from_path(&path)?, path),
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                (Self::default(), cwd.join(&cli.config))
            }
        };

        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.set_root(&root);

        // CLI path override first, then resolve against the root
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.build.output = root.join(&self.build.output);

        self.apply_command_options(cli);
        self.site.url = with_trailing_slash(&self.site.url);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Absolute path of the sitemap inside the output directory.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args, .. } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Query { args } => {
                crate::logger::set_verbose(args.verbose);
            }
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
        self.build.clean = args.clean;

        // Override site URL if provided via CLI
        if let Some(ref url) = args.site_url {
            self.site.url = url.clone();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&self.root, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("typingstories").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\nname = \"x\"").is_err());
    }

    #[test]
    fn test_from_str_wrong_type() {
        let err = SiteConfig::from_str("[serve]\nport = \"eighty\"").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.site.name, "TypingStories");
        assert!(config.build.minify);
        assert_eq!(config.serve.port, 5277);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nname = \"Test\"\n[build]\noutput = \"dist\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_finalize_resolves_output_and_url() {
        let mut config = test_parse_config("[site]\nurl = \"https://typingstories.com\"");
        config.config_path = PathBuf::from("/srv/site/typingstories.toml");
        config.finalize(&cli(&["build"]));

        assert_eq!(config.get_root(), Path::new("/srv/site"));
        assert_eq!(config.build.output, PathBuf::from("/srv/site/public"));
        assert_eq!(config.site.url, "https://typingstories.com/");
        assert_eq!(
            config.sitemap_path(),
            PathBuf::from("/srv/site/public/sitemap.xml")
        );
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = SiteConfig::default();
        config.config_path = PathBuf::from("/srv/site/typingstories.toml");
        config.finalize(&cli(&[
            "-o",
            "out",
            "build",
            "--clean",
            "--sitemap",
            "false",
            "--site-url",
            "https://staging.typingstories.com",
        ]));

        assert_eq!(config.build.output, PathBuf::from("/srv/site/out"));
        assert!(config.build.clean);
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.site.url, "https://staging.typingstories.com/");
    }

    #[test]
    fn test_serve_overrides() {
        let mut config = SiteConfig::default();
        config.finalize(&cli(&["serve", "--port", "9000", "--interface", "0.0.0.0"]));

        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.serve.interface.to_string(), "0.0.0.0");
    }

    #[test]
    fn test_validate_reports_all_sections() {
        let mut config = SiteConfig::default();
        config.site.theme_color = "blue".into();
        config.build.output = PathBuf::new();

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_clean_build_rejects_root_as_output() {
        for output in ["", ".", ".."] {
            let mut config = test_parse_config(&format!("[build]\noutput = \"{output}\""));
            config.config_path = PathBuf::from("/srv/site/typingstories.toml");
            config.finalize(&cli(&["build", "--clean"]));

            assert!(config.build.clean);
            let err = config.validate().unwrap_err();
            let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
                panic!("expected diagnostics for {output:?}, got {err:?}");
            };
            assert_eq!(diag.errors()[0].field.as_str(), "build.output");
        }
    }

    #[test]
    fn test_cli_output_override_is_validated() {
        let mut config = SiteConfig::default();
        config.config_path = PathBuf::from("/srv/site/typingstories.toml");
        config.finalize(&cli(&["-o", ".", "build"]));
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.config_path = PathBuf::from("/srv/site/typingstories.toml");
        config.finalize(&cli(&["-o", "out", "build"]));
        assert!(config.validate().is_ok());
    }
}
