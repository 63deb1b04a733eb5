use std::{collections::HashMap, sync::Arc};

use tracing::{debug, instrument};

use super::{
    Command, DispatchResult, LoaderContext, Severity,
    commands::{client, general, module, plugin, settings},
    types::{CommandMetadata, exit_code},
};

const HELP_KEYWORD: &str = "--help";

/// Flat keyword table of CLI commands.
///
/// Every keyword and alias maps to exactly one command, looked up
/// case-insensitively from the first token. Commands keep their
/// registration order, which is also the order of the help document.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
    keywords: HashMap<String, usize>,
    context: LoaderContext,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// The registry starts with no commands registered. Commands must be added
    /// using the `register_command` method, typically through
    /// `register_all_commands`.
    pub fn new(context: LoaderContext) -> Self {
        Self {
            commands: Vec::new(),
            keywords: HashMap::new(),
            context,
        }
    }

    /// Registers a command under all of its names and aliases.
    ///
    /// A keyword already claimed by an earlier command is reassigned to the
    /// new one.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        let index = self.commands.len();
        let metadata = command.metadata();

        for keyword in metadata.names.iter().chain(&metadata.aliases) {
            self.keywords.insert(keyword.to_lowercase(), index);
        }

        self.commands.push(Arc::from(command));
    }

    /// Dispatches a tokenized command line.
    ///
    /// No tokens shows the help document; an unknown first token yields an
    /// unknown-command warning. Otherwise the matched command runs with the
    /// remaining tokens and its error, if any, becomes the result.
    #[instrument(skip(self), fields(command = tokens.first().map(String::as_str)))]
    pub async fn execute(&self, tokens: &[String]) -> DispatchResult {
        let Some((keyword, args)) = tokens.split_first() else {
            return match self.find(HELP_KEYWORD) {
                Some(help) => Self::run(help, &[]).await,
                None => DispatchResult::plain(""),
            };
        };

        match self.find(keyword) {
            Some(command) => Self::run(command, args).await,
            None => {
                debug!(keyword, "Unknown command");
                DispatchResult::new(
                    format!("Unknown command '{keyword}'. Use --help to see available commands."),
                    Severity::Warning,
                    exit_code::UNKNOWN_COMMAND,
                )
            }
        }
    }

    /// Metadata of every registered command in registration order.
    pub fn metadata(&self) -> Vec<CommandMetadata> {
        self.commands
            .iter()
            .map(|command| command.metadata())
            .collect()
    }

    fn find(&self, keyword: &str) -> Option<&Arc<dyn Command>> {
        self.keywords
            .get(&keyword.to_lowercase())
            .and_then(|index| self.commands.get(*index))
    }

    async fn run(command: &Arc<dyn Command>, args: &[String]) -> DispatchResult {
        match command.execute(args).await {
            Ok(result) => result,
            Err(error) => error.into(),
        }
    }

    /// Registers all available CLI commands.
    ///
    /// Order matters only for the help document; help itself goes last so
    /// it can describe everything else.
    pub fn register_all_commands(&mut self) {
        let context = self.context.clone();

        module::register_commands(self, &context);
        plugin::register_commands(self, &context);
        settings::register_commands(self, &context);
        client::register_commands(self, &context);
        module::register_forced_commands(self, &context);
        general::register_commands(self, &context);
        general::register_help(self);
    }
}
