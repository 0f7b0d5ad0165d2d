//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// TypingStories landing page generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: typingstories.toml)
    #[arg(short = 'C', long, default_value = "typingstories.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the page and sitemap into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Render timestamp (ISO-8601) instead of the system clock
        #[arg(long, value_name = "ISO-8601")]
        now: Option<String>,
    },

    /// Start a preview server that renders the page on every request
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print head metadata and structured data as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Strip indentation from generated XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override the base URL used for canonical, Open Graph and sitemap links.
    ///
    /// Useful for staging deployments whose address differs from production,
    /// without editing typingstories.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Only print head metadata
    #[arg(short, long)]
    pub meta: bool,

    /// Only print structured data
    #[arg(short, long)]
    pub schema: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Render timestamp (ISO-8601) instead of the system clock
    #[arg(long, value_name = "ISO-8601")]
    pub now: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_now() {
        let cli = Cli::try_parse_from([
            "typingstories",
            "build",
            "--now",
            "2024-01-15T00:00:00.000Z",
        ])
        .unwrap();
        assert!(cli.is_build());
        let Commands::Build { now, build_args } = cli.command else {
            unreachable!()
        };
        assert_eq!(now.as_deref(), Some("2024-01-15T00:00:00.000Z"));
        assert!(!build_args.clean);
        assert_eq!(build_args.minify, None);
    }

    #[test]
    fn test_aliases() {
        assert!(Cli::try_parse_from(["typingstories", "b"]).unwrap().is_build());
        assert!(Cli::try_parse_from(["typingstories", "s"]).unwrap().is_serve());
        assert!(Cli::try_parse_from(["typingstories", "q"]).unwrap().is_query());
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::try_parse_from(["typingstories", "query", "--meta"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("typingstories.toml"));
        let Commands::Query { args } = cli.command else {
            unreachable!()
        };
        assert!(args.meta && !args.schema);
    }

    #[test]
    fn test_flag_without_value() {
        let cli = Cli::try_parse_from(["typingstories", "build", "--minify"]).unwrap();
        let Commands::Build { build_args, .. } = cli.command else {
            unreachable!()
        };
        assert_eq!(build_args.minify, Some(true));
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["typingstories"]).is_err());
    }
}
