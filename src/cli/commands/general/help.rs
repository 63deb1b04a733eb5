use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult, DispatchResult, formatting::help_document, types::CommandMetadata,
};

/// Shows the usage document.
///
/// The document is rendered once, at registration, from the metadata of the
/// commands registered before it.
pub struct HelpCommand {
    document: String,
}

impl HelpCommand {
    /// Builds the help command covering `commands` and itself.
    pub fn for_commands(commands: &[CommandMetadata]) -> Self {
        let mut all = commands.to_vec();
        all.push(Self::help_metadata());

        Self {
            document: help_document(&all),
        }
    }

    fn help_metadata() -> CommandMetadata {
        CommandMetadata {
            names: vec!["--help".to_string()],
            aliases: vec!["-h".to_string(), "/?".to_string()],
            usage: String::new(),
            description: "Show this message".to_string(),
        }
    }
}

#[async_trait]
impl Command for HelpCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(DispatchResult::plain(self.document.clone()))
    }

    fn metadata(&self) -> CommandMetadata {
        Self::help_metadata()
    }
}
