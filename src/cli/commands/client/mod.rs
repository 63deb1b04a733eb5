//! Running-client commands.
mod restart;

pub use restart::RestartClientCommand;

use crate::cli::{CommandRegistry, LoaderContext};

/// Registers all client-related commands with the command registry.
pub fn register_commands(registry: &mut CommandRegistry, context: &LoaderContext) {
    registry.register_command(Box::new(RestartClientCommand::new(context.client.clone())));
}
