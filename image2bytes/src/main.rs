//! image2bytes command-line entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use image2bytes_lib::cli::Cli;
use image2bytes_lib::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the user-facing messages
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    image2bytes_lib::load_dotenv();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let outcome = image2bytes_lib::run(&cli, AppConfig::load, &mut stdout.lock())?;
    tracing::debug!(?outcome, "Finished");
    Ok(())
}
