use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use plainblog::logger::configure_logger;
use plainblog::site::{generate_site, GenerationSummary};
use plainblog::view::SiteRenderer;

use crate::config::{open_config, write_sample_cfg};

mod config;

const CFG_FILE_NAME: &str = "plainblog.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. If empty, plainblog.toml is searched next to the executable,
    /// in the current directory and in the user config directory
    #[arg(short, long)]
    config_path: Option<String>,

    /// Directory with the YYYYMMDD_title.txt posts. Overrides the config
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory where the site is written. Overrides the config
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Writes a sample configuration to the given path and exits
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    if let Some(ref path) = args.write_config {
        return write_sample_cfg(path);
    }

    let mut config = open_config(args.config_path.map(PathBuf::from))?;
    if let Some(input_dir) = args.input_dir {
        config.paths.input_dir = input_dir;
    }
    if let Some(output_dir) = args.output_dir {
        config.paths.output_dir = output_dir;
    }

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Generating site from {} into {}", config.paths.input_dir.display(), config.paths.output_dir.display());

    let renderer = SiteRenderer::from_config(&config).context("Loading templates")?;
    let summary = generate_site(&config, &renderer).context("Generating site")?;
    println!("{}", completion_notice(&summary));

    Ok(())
}

fn completion_notice(summary: &GenerationSummary) -> String {
    format!("Site generation complete! {} posts published", summary.post_count)
}

// The returned error is printed once, by the Termination impl
fn main() -> Result<()> {
    run(Args::parse())
}
