//! Help and graphical-mode entry points.
mod help;
mod ui;

pub use help::HelpCommand;
pub use ui::UiCommand;

use crate::cli::{CommandRegistry, LoaderContext};

/// Registers the graphical-mode command.
pub fn register_commands(registry: &mut CommandRegistry, context: &LoaderContext) {
    registry.register_command(Box::new(UiCommand::new(context.sole_instance)));
}

/// Registers the help command. Must run last so the usage document covers
/// every other command.
pub fn register_help(registry: &mut CommandRegistry) {
    let help = HelpCommand::for_commands(&registry.metadata());
    registry.register_command(Box::new(help));
}
