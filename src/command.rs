//! Command surface
//!
//! Commands live in an explicit table handed to the dispatcher at
//! startup; nothing registers itself in a global registry. The binary
//! builds its clap subcommands from this same table.

use crate::api::HttpContentApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::ConsoleSink;
use crate::worker::HarvestWorker;
use futures::future::BoxFuture;
use std::sync::Arc;

/// A named command and its handler
pub struct CliCommand {
    /// Subcommand name
    pub name: &'static str,
    /// One-line help text
    pub about: &'static str,
    /// Handler invoked with the effective configuration
    pub run: fn(Config) -> BoxFuture<'static, Result<()>>,
}

/// Build the command table handed to the dispatcher
pub fn command_table() -> Vec<CliCommand> {
    vec![CliCommand {
        name: "worker",
        about: "Fetch every page of users and posts and print the results",
        run: |config| Box::pin(run_worker(config)),
    }]
}

/// Dispatch a command from the table by name
///
/// # Errors
/// Returns [`Error::Config`] when the name is not in the table, otherwise
/// whatever the handler returns.
pub async fn dispatch(table: &[CliCommand], name: &str, config: Config) -> Result<()> {
    let command = table
        .iter()
        .find(|command| command.name == name)
        .ok_or_else(|| Error::Config {
            message: format!("unknown command: {name}"),
            key: None,
        })?;

    (command.run)(config).await
}

/// The `worker` command: run the fetch worker against the configured API
async fn run_worker(config: Config) -> Result<()> {
    config.validate()?;
    let api = HttpContentApi::new(&config.api)?;
    let worker = HarvestWorker::new(Arc::new(api), Arc::new(ConsoleSink), config.fetch.clone())?;

    let stats = worker.run().await;
    tracing::info!(
        users = stats.users_rendered,
        user_failures = stats.user_details_failed + stats.user_pages_failed,
        posts = stats.posts_rendered,
        post_page_failures = stats.post_pages_failed,
        "harvest complete"
    );
    Ok(())
}
