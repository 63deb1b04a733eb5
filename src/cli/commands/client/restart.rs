use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::{
    cli::{
        CliError, Command, CommandResult, DispatchResult,
        types::{CommandMetadata, exit_code},
    },
    services::ClientControl,
};

/// Asks the running client to restart its UX process.
///
/// The request is awaited without a timeout of its own.
pub struct RestartClientCommand {
    client: Arc<dyn ClientControl>,
}

impl RestartClientCommand {
    /// Creates a new RestartClientCommand.
    pub fn new(client: Arc<dyn ClientControl>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Command for RestartClientCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        if !self.client.is_running().await {
            return Err(CliError::precondition(
                "League Client UX is not running.",
                exit_code::CLIENT_NOT_RUNNING,
            ));
        }

        self.client.restart_ux().await.map_err(|e| {
            warn!(error = %e, "Client restart failed");
            CliError::capability(
                format!("Failed to restart the League Client UX: {e}"),
                exit_code::CLIENT_RESTART_FAILED,
            )
        })?;

        Ok(DispatchResult::info(
            "Requested the League Client UX to restart.",
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            names: vec!["--restart-client".to_string()],
            aliases: Vec::new(),
            usage: String::new(),
            description: "Ask the League Client UX to restart".to_string(),
        }
    }
}
