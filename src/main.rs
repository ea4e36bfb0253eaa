//! Binary entry point: builds the CLI surface from the explicit command
//! table and dispatches the chosen subcommand.

use api_harvest::command::{command_table, dispatch};
use api_harvest::{Config, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let table = command_table();
    let mut cli = clap::Command::new("api-harvest")
        .about("Concurrent paginated fetch worker for REST content APIs")
        .subcommand_required(true)
        .arg_required_else_help(true);
    for command in &table {
        cli = cli.subcommand(clap::Command::new(command.name).about(command.about));
    }

    let matches = cli.get_matches();
    let Some((name, _)) = matches.subcommand() else {
        // unreachable with subcommand_required, but exit quietly anyway
        return Ok(());
    };

    dispatch(&table, name, Config::default()).await
}
