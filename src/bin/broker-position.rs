//! Query the media position through the player's object broker interface.
use std::{path::PathBuf, process};

use clap::Parser;
use mpremote::{
    cli::formatting::format_error,
    config::Config,
    services::broker::{Ior, MediaControlClient, PositionKey, PositionOrigin},
    tracing_config,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "broker-position")]
#[command(about = "Print the player's media position using its broker object reference")]
struct Cli {
    /// File holding the stringified object reference [default: broker.ior_file]
    #[arg(short, long)]
    ior_file: Option<PathBuf>,

    /// Reference point of the position
    #[arg(short, long, value_enum, default_value_t = PositionOrigin::Absolute)]
    origin: PositionOrigin,

    /// Unit of the position
    #[arg(short, long, value_enum, default_value_t = PositionKey::ByteCount)]
    key: PositionKey,

    /// Ask the player to exit afterwards, ignoring failures
    #[arg(long)]
    exit: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init_cli_mode()?;
    let cli = Cli::parse();

    let ior_file = match cli.ior_file {
        Some(path) => path,
        None => Config::load()?.broker.ior_file,
    };
    debug!(path = %ior_file.display(), "Using object reference file");

    if let Err(e) = run(&ior_file, cli.origin, cli.key, cli.exit).await {
        eprintln!("{}", format_error(&e.to_string()));
        process::exit(1);
    }

    Ok(())
}

async fn run(
    ior_file: &std::path::Path,
    origin: PositionOrigin,
    key: PositionKey,
    exit: bool,
) -> Result<(), mpremote::services::broker::BrokerError> {
    let ior = Ior::from_file(ior_file).await?;
    let mut client = MediaControlClient::connect(&ior).await?;

    let position = client.get_media_position(origin, key).await?;
    println!("{position}");

    if exit {
        client.exit().await;
    }

    Ok(())
}
