use std::net::IpAddr;

use clap::Parser;
use lecturai::config::{DataArgs, DEFAULT_UPLOAD_LIMIT};
use server::ServerOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lecturai-server")]
#[command(about = "Serve the lecture library in a browser", long_about = None)]
struct Args {
    #[command(flatten)]
    data: DataArgs,

    #[arg(long, env = "LECTURAI_ADDRESS", default_value = "127.0.0.1")]
    address: IpAddr,

    #[arg(long, env = "LECTURAI_PORT", default_value_t = 8000)]
    port: u16,

    /// Largest accepted upload in bytes
    #[arg(long, env = "LECTURAI_UPLOAD_LIMIT", default_value_t = DEFAULT_UPLOAD_LIMIT)]
    upload_limit: u64,
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = args.data.into_config();
    config.upload_limit = args.upload_limit;

    let options = ServerOptions {
        address: args.address,
        port: args.port,
    };

    server::build(config, options).launch().await?;
    Ok(())
}
