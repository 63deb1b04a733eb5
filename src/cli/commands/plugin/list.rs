use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult, DispatchResult,
        formatting::plugin_checklist,
        types::{CommandMetadata, exit_code},
    },
    plugins::PluginRegistry,
};

/// Prints every installed plugin with its state.
///
/// Output always goes to the console; a checklist is not dialog material.
pub struct ListPluginsCommand {
    plugins: Arc<dyn PluginRegistry>,
}

impl ListPluginsCommand {
    /// Creates a new ListPluginsCommand over the given registry.
    pub fn new(plugins: Arc<dyn PluginRegistry>) -> Self {
        Self { plugins }
    }
}

#[async_trait]
impl Command for ListPluginsCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let plugins = self.plugins.all().map_err(|e| {
            CliError::capability(
                format!("Failed to list plugins: {e}"),
                exit_code::PLUGIN_LIST_FAILED,
            )
        })?;

        if plugins.is_empty() {
            return Ok(
                DispatchResult::info("No plugins were found in the plugins directory.").printed(),
            );
        }

        Ok(DispatchResult::plain(plugin_checklist(&plugins)).printed())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            names: vec!["--list-plugins".to_string()],
            aliases: Vec::new(),
            usage: String::new(),
            description: "List available plugins and their status".to_string(),
        }
    }
}
