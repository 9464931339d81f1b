//! mpremote - desktop and command line remote for a D-Bus media player.

use std::{env, error::Error, process};

use mpremote::{
    cli::{CliService, formatting::format_error},
    config::Config,
    tracing_config, ui,
};
use tracing::{Level, info, span};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("gui") => run_gui(),
        _ => {
            tracing_config::init_cli_mode()?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_cli_command(args.get(1..).unwrap_or(&[])))
        }
    }
}

fn run_gui() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    tracing_config::init_with_file(config.general.log_level)?;

    let _span = span!(Level::INFO, "mpremote_gui").entered();
    info!("Starting mpremote controller");

    ui::run(config)
}

/// Executes CLI commands through the CliService.
///
/// Routes `<category> <command> [args...]` to the matching command and
/// prints its output. Failures are printed in red and exit with status 1.
///
/// # Errors
/// Returns error if the configuration cannot be loaded.
async fn run_cli_command(args: &[String]) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let cli_service = CliService::new(config);

    let category = args.first().map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    let result = cli_service
        .execute_command(category, command, command_args)
        .await;

    match result {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
