use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    cli::{
        CliError, Command, CommandResult, DispatchResult,
        types::{CommandMetadata, exit_code},
    },
    config_store::ConfigStore,
    services::ClientControl,
};

use super::save_failed;

const NOT_SET: &str = "[not set]";

/// Stores the client installation path.
///
/// An empty path clears the local value. Anything else must look like a
/// client directory before it is saved.
pub struct SetLeaguePathCommand {
    store: Arc<ConfigStore>,
    client: Arc<dyn ClientControl>,
}

impl SetLeaguePathCommand {
    /// Creates a new SetLeaguePathCommand.
    ///
    /// # Arguments
    ///
    /// * `store` - settings store the path is written to
    /// * `client` - provides the installation directory predicate
    pub fn new(store: Arc<ConfigStore>, client: Arc<dyn ClientControl>) -> Self {
        Self { store, client }
    }
}

#[async_trait]
impl Command for SetLeaguePathCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let joined = args.join(" ");
        let path = joined.trim();

        if path.is_empty() {
            self.store
                .set_league_path("")
                .map_err(|e| save_failed(&e))?;
            info!("Cleared League path");
            return Ok(DispatchResult::info("League of Legends path cleared."));
        }

        if !self.client.is_valid_dir(Path::new(path)) {
            warn!(path, "Rejected League path");
            return Err(CliError::precondition(
                format!("'{path}' does not appear to be a valid League of Legends directory."),
                exit_code::LEAGUE_PATH_INVALID,
            ));
        }

        self.store
            .set_league_path(path)
            .map_err(|e| save_failed(&e))?;

        Ok(DispatchResult::info(format!(
            "League of Legends path set to '{path}'."
        )))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            names: vec!["--set-league-path".to_string()],
            aliases: Vec::new(),
            usage: "<path>".to_string(),
            description: "Set the League of Legends installation path".to_string(),
        }
    }
}

/// Shows the effective client installation path.
pub struct GetLeaguePathCommand {
    store: Arc<ConfigStore>,
}

impl GetLeaguePathCommand {
    /// Creates a new GetLeaguePathCommand.
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for GetLeaguePathCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let path = self.store.league_path();
        let shown = if path.trim().is_empty() {
            NOT_SET
        } else {
            path.as_str()
        };

        Ok(DispatchResult::plain(format!(
            "League of Legends path: {shown}"
        )))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            names: vec!["--get-league-path".to_string()],
            aliases: Vec::new(),
            usage: String::new(),
            description: "Show the configured League of Legends path".to_string(),
        }
    }
}
