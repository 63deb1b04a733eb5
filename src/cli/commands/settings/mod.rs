//! Settings commands: client path and loader options.
mod league_path;
mod option;

pub use league_path::{GetLeaguePathCommand, SetLeaguePathCommand};
pub use option::{SetOptionCommand, parse_flag};

use crate::cli::{CliError, CommandRegistry, LoaderContext, types::exit_code};
use crate::config_store::ConfigError;

/// Registers all settings-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared collaborators for the commands
pub fn register_commands(registry: &mut CommandRegistry, context: &LoaderContext) {
    registry.register_command(Box::new(SetLeaguePathCommand::new(
        context.store.clone(),
        context.client.clone(),
    )));

    registry.register_command(Box::new(GetLeaguePathCommand::new(context.store.clone())));

    registry.register_command(Box::new(SetOptionCommand::new(context.store.clone())));
}

fn save_failed(error: &ConfigError) -> CliError {
    CliError::capability(
        format!("Failed to save settings: {error}"),
        exit_code::SETTINGS_FAILED,
    )
}
