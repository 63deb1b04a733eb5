use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult, DispatchResult, Severity,
    formatting::PRODUCT_NAME,
    types::{CommandMetadata, exit_code},
};

/// Graphical mode entry point.
///
/// The graphical interface ships separately; this only reports whether one
/// is already running.
pub struct UiCommand {
    sole_instance: bool,
}

impl UiCommand {
    /// Creates a new UiCommand.
    pub fn new(sole_instance: bool) -> Self {
        Self { sole_instance }
    }
}

#[async_trait]
impl Command for UiCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        if !self.sole_instance {
            return Ok(DispatchResult::info(format!(
                "{PRODUCT_NAME} is already running."
            )));
        }

        Ok(DispatchResult::new(
            "The graphical interface is not available in this build. Use --help to see available commands.",
            Severity::Warning,
            exit_code::UI_UNAVAILABLE,
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            names: vec!["--ui".to_string()],
            aliases: vec!["/ui".to_string(), "--show-ui".to_string()],
            usage: String::new(),
            description: "Launch the legacy graphical interface".to_string(),
        }
    }
}
