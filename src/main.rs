//! Almanac - build-time tag, archive and search indexes for a markdown blog.

mod build;
mod cli;
mod config;
mod content;
mod index;
mod logger;
mod utils;
mod view;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => {
            let report = build_site(&config)?;
            log!("build"; "done: {}", report.summary());
            Ok(())
        }
        Commands::Archive {
            path,
            page,
            expand_all,
        } => view::archive::show(&config, path.as_deref(), *page, *expand_all),
        Commands::Tags { limit } => view::tags::show(&config, *limit),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every field has a default.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
