use anyhow::{Context, Result};
use clap::Parser;
use codingame_bundle::{cli::Cli, config::Config, pipeline::Pipeline};
use path_slash::PathExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so --stdout and --list output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let mut pipeline = Pipeline::new(config)?;
    pipeline
        .collect_sources()
        .context("could not resolve source files")?;

    if cli.list {
        for source in pipeline.sources() {
            println!("{}", source.to_slash_lossy());
        }
        return Ok(());
    }

    pipeline
        .transform_sources()
        .context("could not transform source files")?;
    pipeline.build_bundle();

    if cli.stdout {
        print!("{}", pipeline.bundle().unwrap_or_default());
    } else {
        pipeline.write().context("could not write bundle")?;
    }

    Ok(())
}
