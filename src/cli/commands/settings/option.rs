use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult, DispatchResult,
        types::{CommandMetadata, exit_code},
    },
    config_store::{ConfigError, ConfigStore},
};

use super::save_failed;

/// Parses a user-typed switch value.
///
/// `1/true/yes/on` and `0/false/no/off`, any case, surrounding whitespace
/// ignored.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

type FlagSetter = fn(&ConfigStore, bool) -> Result<(), ConfigError>;

/// Updates one loader option.
///
/// Keys: `use-symlink`, `optimize-client`, `super-low-spec` (switches) and
/// `language` (free text).
pub struct SetOptionCommand {
    store: Arc<ConfigStore>,
}

impl SetOptionCommand {
    /// Creates a new SetOptionCommand.
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    fn set_flag(&self, key: &str, value: &str, setter: FlagSetter) -> CommandResult {
        let flag = parse_flag(value).ok_or_else(|| {
            CliError::precondition(
                format!("Value for {key} must be true/false."),
                exit_code::OPTION_BAD_VALUE,
            )
        })?;

        setter(&self.store, flag).map_err(|e| save_failed(&e))?;

        Ok(DispatchResult::info(format!("{key} set to {flag}.")))
    }
}

#[async_trait]
impl Command for SetOptionCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let [key, value @ ..] = args else {
            return Err(usage());
        };
        if value.is_empty() {
            return Err(usage());
        }

        let key = key.to_lowercase();
        let value = value.join(" ");
        let value = value.trim();

        match key.as_str() {
            "use-symlink" => self.set_flag(&key, value, ConfigStore::set_use_symlink),
            "optimize-client" => self.set_flag(&key, value, ConfigStore::set_optimize_client),
            "super-low-spec" => {
                self.set_flag(&key, value, ConfigStore::set_super_low_spec_mode)
            }
            "language" => {
                if value.is_empty() {
                    return Err(CliError::precondition(
                        "Value for language cannot be empty.",
                        exit_code::OPTION_BAD_VALUE,
                    ));
                }

                self.store
                    .set_language(value)
                    .map_err(|e| save_failed(&e))?;
                Ok(DispatchResult::info(format!("language set to '{value}'.")))
            }
            _ => Err(CliError::precondition(
                format!("Unknown option '{key}'."),
                exit_code::OPTION_UNKNOWN,
            )),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            names: vec!["--set-option".to_string()],
            aliases: Vec::new(),
            usage: "<key> <value>".to_string(),
            description: "Update loader options\nkeys: use-symlink, optimize-client, super-low-spec, language"
                .to_string(),
        }
    }
}

fn usage() -> CliError {
    CliError::usage("Usage: --set-option <key> <value>", exit_code::OPTION_USAGE)
}
