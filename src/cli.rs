//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build-time tag, archive and search indexes for a markdown blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content collection directory (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory for index files (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: almanac.toml)
    #[arg(short = 'C', long, default_value = "almanac.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Recompute and write the tag, archive and search indexes
    Build {
        /// Exclude drafts from every index
        #[arg(short, long)]
        production: bool,

        /// Write the search index
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        search: Option<bool>,
    },

    /// Show the archive tree and the posts of a selected year or month
    Archive {
        /// Selection path, e.g. `2024` or `/archives/2024/03`
        path: Option<String>,

        /// Page of the post listing (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Expand every year, not only the selected one
        #[arg(short, long)]
        expand_all: bool,
    },

    /// Show tag counts, most used first
    Tags {
        /// Show at most this many tags
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_archive(&self) -> bool {
        matches!(self.command, Commands::Archive { .. })
    }
    pub const fn is_tags(&self) -> bool {
        matches!(self.command, Commands::Tags { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("almanac").chain(args.iter().copied()))
    }

    #[test]
    fn test_build_defaults() {
        let cli = parse(&["build"]);
        assert!(cli.is_build());
        assert_eq!(cli.config, PathBuf::from("almanac.toml"));
        match cli.command {
            Commands::Build { production, search } => {
                assert!(!production);
                assert_eq!(search, None);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_build_flags() {
        let cli = parse(&["-C", "site.toml", "build", "--production", "--search", "false"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match cli.command {
            Commands::Build { production, search } => {
                assert!(production);
                assert_eq!(search, Some(false));
            }
            _ => panic!("expected build"),
        }

        match parse(&["build", "--search"]).command {
            Commands::Build { search, .. } => assert_eq!(search, Some(true)),
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_archive_args() {
        let cli = parse(&["archive", "/archives/2024/03", "--page", "2", "--expand-all"]);
        assert!(cli.is_archive());
        match cli.command {
            Commands::Archive {
                path,
                page,
                expand_all,
            } => {
                assert_eq!(path.as_deref(), Some("/archives/2024/03"));
                assert_eq!(page, 2);
                assert!(expand_all);
            }
            _ => panic!("expected archive"),
        }

        match parse(&["archive"]).command {
            Commands::Archive { path, page, .. } => {
                assert!(path.is_none());
                assert_eq!(page, 1);
            }
            _ => panic!("expected archive"),
        }
    }

    #[test]
    fn test_tags_and_global_paths() {
        let cli = parse(&["--root", "site", "-c", "posts", "-o", "public", "tags", "--limit", "10"]);
        assert!(cli.is_tags());
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.content, Some(PathBuf::from("posts")));
        assert_eq!(cli.output, Some(PathBuf::from("public")));
        match cli.command {
            Commands::Tags { limit } => assert_eq!(limit, Some(10)),
            _ => panic!("expected tags"),
        }
    }
}
