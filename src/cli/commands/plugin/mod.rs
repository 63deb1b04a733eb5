//! Plugin listing and toggling commands.
mod list;
mod toggle;

pub use list::ListPluginsCommand;
pub use toggle::PluginToggleCommand;

use crate::cli::{CommandRegistry, LoaderContext};

/// Registers all plugin-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared collaborators for the commands
pub fn register_commands(registry: &mut CommandRegistry, context: &LoaderContext) {
    registry.register_command(Box::new(ListPluginsCommand::new(context.plugins.clone())));

    for target in [Some(true), Some(false), None] {
        registry.register_command(Box::new(PluginToggleCommand::new(
            target,
            context.plugins.clone(),
        )));
    }
}
