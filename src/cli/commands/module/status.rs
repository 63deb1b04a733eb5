use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult, DispatchResult, Severity,
        types::{CommandMetadata, exit_code},
    },
    services::ModuleControl,
};

/// Reports whether the core module is active.
///
/// Exit code 0 means active and 1 inactive; the latter is informational.
pub struct StatusCommand {
    module: Arc<dyn ModuleControl>,
}

impl StatusCommand {
    /// Creates a new StatusCommand over the given module.
    pub fn new(module: Arc<dyn ModuleControl>) -> Self {
        Self { module }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        if !self.module.is_found() {
            return Err(CliError::precondition(
                "Pengu core module (`core.dll`) could not be found.",
                exit_code::MODULE_MISSING,
            ));
        }

        if self.module.is_active() {
            Ok(DispatchResult::info("Pengu is currently ACTIVE."))
        } else {
            Ok(DispatchResult::new(
                "Pengu is currently INACTIVE.",
                Severity::None,
                exit_code::INACTIVE,
            ))
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            names: vec!["--status".to_string()],
            aliases: Vec::new(),
            usage: String::new(),
            description: "Print the current activation status".to_string(),
        }
    }
}
