use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use variable_insight::cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    cli::run(args)
}
