use color_eyre::Result;

use coffeu::cli::{parse_args, run_command, CliCommand, VERSION};
use coffeu::logging::init_tracing;
use coffeu::startup::ClientConfig;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    // Handle --version before any initialization
    if command == CliCommand::Version {
        println!("coffeu {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;
    init_tracing();

    let config = ClientConfig::from_env();
    tracing::debug!(?command, base_url = %config.base_url, "Starting");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_command(command, &config))
}
