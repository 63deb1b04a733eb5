use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    cli::{
        CliError, Command, CommandResult, DispatchResult,
        types::{CommandMetadata, exit_code},
    },
    services::ModuleControl,
};

/// Activates or deactivates the core module.
///
/// The regular variants refuse to run while another loader instance is up
/// or the module is loaded into a live client; the forced variants only
/// require the module to exist.
pub struct ActivationCommand {
    active: bool,
    forced: bool,
    module: Arc<dyn ModuleControl>,
    sole_instance: bool,
}

impl ActivationCommand {
    /// Creates the command for the given target state.
    ///
    /// # Arguments
    ///
    /// * `active` - `true` to activate, `false` to deactivate
    /// * `forced` - skip the running-instance and loaded-module checks
    /// * `module` - native module capability
    /// * `sole_instance` - whether this process holds the instance lock
    pub fn new(
        active: bool,
        forced: bool,
        module: Arc<dyn ModuleControl>,
        sole_instance: bool,
    ) -> Self {
        Self {
            active,
            forced,
            module,
            sole_instance,
        }
    }

    fn action(&self) -> &'static str {
        if self.active { "activate" } else { "deactivate" }
    }
}

#[async_trait]
impl Command for ActivationCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let action = self.action();

        if !self.module.is_found() {
            warn!(action, "Core module not found");
            return Err(CliError::precondition(
                format!("Unable to {action} Pengu because `core.dll` was not found next to the loader."),
                exit_code::MODULE_MISSING,
            ));
        }

        if !self.forced && (!self.sole_instance || self.module.is_loaded()) {
            warn!(
                action,
                sole_instance = self.sole_instance,
                "Refusing activation change while loader or client is running"
            );
            return Err(CliError::precondition(
                format!("Please close the running League Client and Loader menu before you {action} it."),
                exit_code::BUSY,
            ));
        }

        self.module.set_active(self.active).map_err(|e| {
            warn!(action, error = %e, "Activation change failed");
            CliError::capability(
                format!("Failed to {action} Pengu: {e}. Make sure League is closed and try again."),
                exit_code::ACTIVATION_FAILED,
            )
        })?;

        info!(active = self.active, forced = self.forced, "Activation changed");

        let done = if self.active { "activated" } else { "deactivated" };
        Ok(DispatchResult::info(format!("Pengu has been {done}.")))
    }

    fn metadata(&self) -> CommandMetadata {
        let (names, aliases, description): (&[&str], &[&str], &str) =
            match (self.forced, self.active) {
                (false, true) => (&["--install", "--activate"], &["/install"], "Activate Pengu"),
                (false, false) => (
                    &["--uninstall", "--deactivate"],
                    &["/uninstall"],
                    "Deactivate Pengu",
                ),
                (true, true) => (
                    &["--force-activate"],
                    &[],
                    "Force Pengu activation even if the client is running",
                ),
                (true, false) => (
                    &["--force-deactivate"],
                    &[],
                    "Force Pengu deactivation even if the client is running",
                ),
            };

        CommandMetadata {
            names: names.iter().map(|name| name.to_string()).collect(),
            aliases: aliases.iter().map(|name| name.to_string()).collect(),
            usage: String::new(),
            description: description.to_string(),
        }
    }
}
