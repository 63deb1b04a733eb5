use async_trait::async_trait;
use thiserror::Error;

/// Process exit codes reported by command handlers.
pub mod exit_code {
    /// Command succeeded.
    pub const OK: i32 = 0;
    /// `--status`: module present but inactive.
    pub const INACTIVE: i32 = 1;
    /// Another loader instance or a live client blocks the change.
    pub const BUSY: i32 = -1;
    /// The native core module is missing.
    pub const MODULE_MISSING: i32 = -2;
    /// The module refused the activation change.
    pub const ACTIVATION_FAILED: i32 = -3;
    /// First token is not a known command.
    pub const UNKNOWN_COMMAND: i32 = -10;
    /// Plugin command without an identifier.
    pub const PLUGIN_USAGE: i32 = -11;
    /// No plugin matches the identifier.
    pub const PLUGIN_NOT_FOUND: i32 = -12;
    /// The path does not look like a client installation.
    pub const LEAGUE_PATH_INVALID: i32 = -14;
    /// `--set-option` without key and value.
    pub const OPTION_USAGE: i32 = -15;
    /// Option value does not parse.
    pub const OPTION_BAD_VALUE: i32 = -16;
    /// Option key is not recognized.
    pub const OPTION_UNKNOWN: i32 = -17;
    /// The client is not running.
    pub const CLIENT_NOT_RUNNING: i32 = -18;
    /// The restart request failed.
    pub const CLIENT_RESTART_FAILED: i32 = -19;
    /// The plugin registry refused the toggle.
    pub const PLUGIN_TOGGLE_FAILED: i32 = -20;
    /// The plugin registry could not be enumerated.
    pub const PLUGIN_LIST_FAILED: i32 = -21;
    /// The settings file could not be prepared or written.
    pub const SETTINGS_FAILED: i32 = -22;
    /// Graphical mode is not part of this build.
    pub const UI_UNAVAILABLE: i32 = -23;
}

/// How prominently a result should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Plain output with no category.
    None,
    /// Confirmation or benign absence.
    Info,
    /// Usage problem.
    Warning,
    /// Failed precondition or capability.
    Error,
}

/// Outcome of a single command invocation.
///
/// Every handler produces exactly one of these; the caller decides how it is
/// shown and exits with `exit_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// Text shown to the user.
    pub message: String,
    /// Presentation category.
    pub severity: Severity,
    /// Process exit code.
    pub exit_code: i32,
    /// Always written to the console, whatever output mode was requested.
    pub print_only: bool,
}

impl DispatchResult {
    /// Creates a result.
    pub fn new(message: impl Into<String>, severity: Severity, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            severity,
            exit_code,
            print_only: false,
        }
    }

    /// Informational result with exit code 0.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, exit_code::OK)
    }

    /// Uncategorized result with exit code 0.
    pub fn plain(message: impl Into<String>) -> Self {
        Self::new(message, Severity::None, exit_code::OK)
    }

    /// Marks the result as console output regardless of output mode.
    pub fn printed(mut self) -> Self {
        self.print_only = true;
        self
    }
}

/// Errors that can occur during CLI command execution.
///
/// Each variant carries the exit code it maps to. Conversion into a
/// [`DispatchResult`] picks the severity: usage problems are warnings,
/// everything else is an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Missing or malformed arguments.
    #[error("{message}")]
    Usage {
        /// Text shown to the user
        message: String,
        /// Exit code
        code: i32,
    },

    /// A precondition for the command does not hold.
    #[error("{message}")]
    Precondition {
        /// Text shown to the user
        message: String,
        /// Exit code
        code: i32,
    },

    /// An external collaborator failed.
    #[error("{message}")]
    Capability {
        /// Text shown to the user
        message: String,
        /// Exit code
        code: i32,
    },
}

impl CliError {
    /// Usage error with `code`.
    pub fn usage(message: impl Into<String>, code: i32) -> Self {
        Self::Usage {
            message: message.into(),
            code,
        }
    }

    /// Precondition failure with `code`.
    pub fn precondition(message: impl Into<String>, code: i32) -> Self {
        Self::Precondition {
            message: message.into(),
            code,
        }
    }

    /// Capability failure with `code`.
    pub fn capability(message: impl Into<String>, code: i32) -> Self {
        Self::Capability {
            message: message.into(),
            code,
        }
    }

    /// Exit code this error maps to.
    pub fn code(&self) -> i32 {
        match self {
            Self::Usage { code, .. }
            | Self::Precondition { code, .. }
            | Self::Capability { code, .. } => *code,
        }
    }

    /// Severity this error is presented with.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Usage { .. } => Severity::Warning,
            Self::Precondition { .. } | Self::Capability { .. } => Severity::Error,
        }
    }
}

impl From<CliError> for DispatchResult {
    fn from(error: CliError) -> Self {
        DispatchResult::new(error.to_string(), error.severity(), error.code())
    }
}

/// Type alias for command execution results.
pub type CommandResult = Result<DispatchResult, CliError>;

/// Complete metadata for a CLI command.
///
/// Drives both keyword lookup and the generated help document.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// Keywords that select this command, primary first (e.g. `--install`).
    pub names: Vec<String>,

    /// Extra keywords accepted but left out of the help document.
    pub aliases: Vec<String>,

    /// Argument synopsis shown after the keywords (e.g. `<name>`).
    pub usage: String,

    /// Brief description of what this command does.
    pub description: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their collaborators through their constructors and
/// only ever produce a result; they never present it themselves.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the tokens that followed its keyword.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for usage problems, failed preconditions and
    /// collaborator failures.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
