use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    cli::{
        CliError, Command, CommandResult, DispatchResult,
        types::{CommandMetadata, exit_code},
    },
    plugins::{PluginRegistry, resolve},
};

/// Enables, disables or flips one plugin.
///
/// The identifier is every token after the keyword joined with single
/// spaces, so names containing spaces need no quoting.
pub struct PluginToggleCommand {
    target: Option<bool>,
    plugins: Arc<dyn PluginRegistry>,
}

impl PluginToggleCommand {
    /// Creates the command.
    ///
    /// # Arguments
    ///
    /// * `target` - desired state, or `None` to flip the current one
    /// * `plugins` - registry the plugin is resolved against
    pub fn new(target: Option<bool>, plugins: Arc<dyn PluginRegistry>) -> Self {
        Self { target, plugins }
    }

    fn keyword(&self) -> &'static str {
        match self.target {
            Some(true) => "--enable-plugin",
            Some(false) => "--disable-plugin",
            None => "--toggle-plugin",
        }
    }
}

fn state_name(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

#[async_trait]
impl Command for PluginToggleCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        if args.is_empty() {
            return Err(CliError::usage(
                format!("Usage: {} <plugin-name>", self.keyword()),
                exit_code::PLUGIN_USAGE,
            ));
        }

        let joined = args.join(" ");
        let identifier = joined.trim();
        if identifier.is_empty() {
            return Err(CliError::usage(
                "Plugin name cannot be empty.",
                exit_code::PLUGIN_USAGE,
            ));
        }

        let plugins = self.plugins.all().map_err(|e| {
            CliError::capability(
                format!("Failed to list plugins: {e}"),
                exit_code::PLUGIN_LIST_FAILED,
            )
        })?;

        let plugin = resolve(identifier, &plugins).ok_or_else(|| {
            CliError::precondition(
                format!("Plugin '{identifier}' was not found."),
                exit_code::PLUGIN_NOT_FOUND,
            )
        })?;

        let desired = self.target.unwrap_or(!plugin.enabled);
        if plugin.enabled == desired {
            return Ok(DispatchResult::info(format!(
                "Plugin '{}' is already {}.",
                plugin.name,
                state_name(plugin.enabled)
            )));
        }

        let updated = self.plugins.toggle(plugin).map_err(|e| {
            warn!(plugin = %plugin.name, error = %e, "Plugin toggle failed");
            CliError::capability(
                format!("Failed to toggle plugin '{}': {e}", plugin.name),
                exit_code::PLUGIN_TOGGLE_FAILED,
            )
        })?;

        info!(plugin = %plugin.name, enabled = updated.enabled, "Plugin toggled");

        Ok(DispatchResult::info(format!(
            "Plugin '{}' is now {}.",
            plugin.name,
            state_name(updated.enabled)
        )))
    }

    fn metadata(&self) -> CommandMetadata {
        let description = match self.target {
            Some(true) => "Enable a plugin by name or path segment",
            Some(false) => "Disable a plugin by name or path segment",
            None => "Toggle a plugin",
        };

        CommandMetadata {
            names: vec![self.keyword().to_string()],
            aliases: Vec::new(),
            usage: "<name>".to_string(),
            description: description.to_string(),
        }
    }
}
