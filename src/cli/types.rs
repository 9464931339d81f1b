use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// Covers command discovery, argument validation and failures of the
/// services a command talks to. Each variant carries enough context to be
/// printed to the user as is.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Wrong number of arguments for a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// One argument could not be interpreted.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        arg: String,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration could not be rendered.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A service the command relies on failed.
    #[error("{service} error: {details}")]
    ServiceError {
        /// Service that failed
        service: String,
        /// Failure details
        details: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return their output as a `String`, printed by the caller.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "value", "uri").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
///
/// Shown in help text as a hint of what kind of value is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// An integer value.
    Number,

    /// A switch: on/off, true/false, yes/no, 1/0.
    Boolean,

    /// A location or file system path.
    Path,
}

impl ArgType {
    /// Placeholder shown in usage lines.
    pub fn hint(self) -> &'static str {
        match self {
            Self::String => "text",
            Self::Number => "int",
            Self::Boolean => "on|off",
            Self::Path => "path",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// Single source of truth for a command's identity, arguments, usage
/// examples and category. Used for help generation and argument count
/// validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "play", "volume").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "player", "config").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors. The
/// registry validates the argument count against [`Command::metadata`]
/// before calling [`Command::execute`].
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, unavailable
    /// services or failed remote calls.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
