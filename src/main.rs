use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use awesome_export::cli::Args;
use awesome_export::cli::commands::export::{self, ExportOptions};
use awesome_export::output::{self, OutputConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });
    init_logging(args.verbose)?;

    export::run(ExportOptions {
        config: args.config,
    })
    .await
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
