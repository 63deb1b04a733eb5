//! Core module activation commands.
mod activate;
mod status;

pub use activate::ActivationCommand;
pub use status::StatusCommand;

use crate::cli::{CommandRegistry, LoaderContext};

/// Registers activation and status commands.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared collaborators for the commands
pub fn register_commands(registry: &mut CommandRegistry, context: &LoaderContext) {
    registry.register_command(Box::new(ActivationCommand::new(
        true,
        false,
        context.module.clone(),
        context.sole_instance,
    )));

    registry.register_command(Box::new(ActivationCommand::new(
        false,
        false,
        context.module.clone(),
        context.sole_instance,
    )));

    registry.register_command(Box::new(StatusCommand::new(context.module.clone())));
}

/// Registers the forced activation variants, which skip the busy check.
pub fn register_forced_commands(registry: &mut CommandRegistry, context: &LoaderContext) {
    registry.register_command(Box::new(ActivationCommand::new(
        true,
        true,
        context.module.clone(),
        context.sole_instance,
    )));

    registry.register_command(Box::new(ActivationCommand::new(
        false,
        true,
        context.module.clone(),
        context.sole_instance,
    )));
}
