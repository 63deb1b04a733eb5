use super::{CommandRegistry, DispatchResult, LoaderContext, types::CommandMetadata};

/// High-level service for dispatching loader commands.
///
/// Owns the fully populated registry for one process.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `context` - Collaborators shared by every command
    pub fn new(context: LoaderContext) -> Self {
        let mut registry = CommandRegistry::new(context);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Runs the command named by the first token.
    ///
    /// # Arguments
    /// * `tokens` - Output of [`command_args`](super::command_args)
    pub async fn dispatch(&self, tokens: &[String]) -> DispatchResult {
        self.registry.execute(tokens).await
    }

    /// Lists metadata for every command in help order.
    pub fn list_all(&self) -> Vec<CommandMetadata> {
        self.registry.metadata()
    }
}
