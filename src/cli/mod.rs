//! Command-line interface of the loader.
//!
//! Raw arguments are tokenized, the first token selects a command from a
//! flat keyword table and the command returns a [`DispatchResult`] that is
//! presented on the console or in a message box.

mod args;
pub mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
pub mod sink;
pub mod types;

#[cfg(test)]
mod tests;

pub use args::{command_args, is_data_store_path, is_silent_flag};
pub use context::LoaderContext;
pub use registry::CommandRegistry;
pub use service::CliService;
pub use sink::{ConsoleSink, ModalSink, Presenter, ResultSink};
pub use types::{CliError, Command, CommandResult, DispatchResult, Severity, exit_code};
