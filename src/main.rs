use clap::Parser;
use lecturai::Controller;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{execute_command, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.data.into_config();
    let mut controller = Controller::open(&config).await?;

    execute_command(&mut controller, cli.command).await?;

    Ok(())
}
