//! Command-line interface definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::icons::IconStyle;

/// Top-level CLI entry point for the icon inliner.
#[derive(Parser, Debug)]
#[command(
    name = "heroicons",
    about = "Inline SVG icon sets as CSS mask-image utility classes",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Config file (default: $HEROICONS_CONFIG, then ./heroicons.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the icon root directory
    #[arg(long, global = true)]
    pub icons_dir: Option<PathBuf>,

    /// Preview changes without writing files
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the stylesheet for icons referenced in content files
    Build(BuildOpts),
    /// List every icon name found in the icon directories
    List(ListOpts),
    /// Print the CSS rule for one icon
    Show(ShowOpts),
    /// Validate configuration and icon directories
    Check,
    /// Print shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options for the `build` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct BuildOpts {
    /// Write the stylesheet here instead of the configured output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit every icon, not only those referenced in content files
    #[arg(long)]
    pub all: bool,

    /// Fail if content references an unknown icon
    #[arg(long)]
    pub strict: bool,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct ListOpts {
    /// Only list icons of this style
    #[arg(long, value_enum, ignore_case = true)]
    pub style: Option<IconStyle>,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Options for the `show` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ShowOpts {
    /// Logical icon name (e.g. `home`, `x-mark-mini`)
    pub name: String,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::unreachable
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_defaults() {
        let cli = Cli::parse_from(["heroicons", "build"]);
        assert!(
            matches!(&cli.command, Command::Build(_)),
            "Expected Build command"
        );
        if let Command::Build(opts) = cli.command {
            assert!(!opts.all);
            assert!(!opts.strict);
            assert!(opts.output.is_none());
        }
    }

    #[test]
    fn parse_build_flags() {
        let cli = Cli::parse_from(["heroicons", "build", "--all", "--strict", "-o", "out.css"]);
        if let Command::Build(opts) = cli.command {
            assert!(opts.all);
            assert!(opts.strict);
            assert_eq!(opts.output, Some(PathBuf::from("out.css")));
        } else {
            unreachable!("expected build command");
        }
    }

    #[test]
    fn parse_global_config() {
        let cli = Cli::parse_from(["heroicons", "--config", "assets/heroicons.toml", "check"]);
        assert_eq!(
            cli.global.config,
            Some(PathBuf::from("assets/heroicons.toml"))
        );
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn parse_global_after_subcommand() {
        let cli = Cli::parse_from(["heroicons", "list", "--icons-dir", "/icons", "-d"]);
        assert_eq!(cli.global.icons_dir, Some(PathBuf::from("/icons")));
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_list_style_and_json() {
        let cli = Cli::parse_from(["heroicons", "list", "--style", "mini", "--json"]);
        if let Command::List(opts) = cli.command {
            assert_eq!(opts.style, Some(IconStyle::Mini));
            assert!(opts.json);
        } else {
            unreachable!("expected list command");
        }
    }

    #[test]
    fn parse_list_style_ignores_case() {
        let cli = Cli::parse_from(["heroicons", "list", "--style", "Outline"]);
        if let Command::List(opts) = cli.command {
            assert_eq!(opts.style, Some(IconStyle::Outline));
        } else {
            unreachable!("expected list command");
        }
    }

    #[test]
    fn parse_list_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["heroicons", "list", "--style", "duotone"]).is_err());
    }

    #[test]
    fn parse_show_requires_name() {
        assert!(Cli::try_parse_from(["heroicons", "show"]).is_err());
        let cli = Cli::parse_from(["heroicons", "show", "home-solid"]);
        if let Command::Show(opts) = cli.command {
            assert_eq!(opts.name, "home-solid");
        } else {
            unreachable!("expected show command");
        }
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["heroicons", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Command::Completions(CompletionsOpts {
                shell: clap_complete::Shell::Bash
            })
        ));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["heroicons", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["heroicons", "-v", "build"]);
        assert!(cli.verbose);
    }
}
