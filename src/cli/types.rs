use std::io;

use thiserror::Error;

use crate::error::ConfigError;

/// Errors that can occur during CLI command execution.
///
/// A configuration that fails validation is not an error: it is reported in
/// the command output with [`CommandOutput::passed`] unset. These variants
/// cover the conditions that stop a command from producing a report at all.
#[derive(Error, Debug)]
pub enum CliError {
    /// No command or alias with this name is registered.
    #[error("Unknown command: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments, too many arguments, or an option the command does not know.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the configuration layer.
    ///
    /// Wraps unknown schema names, unreadable files and serialization
    /// failures.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Text a command produced together with its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Report printed on stdout.
    pub text: String,
    /// Whether everything the command checked or wrote succeeded.
    pub passed: bool,
}

impl CommandOutput {
    /// Creates an output with an explicit verdict.
    pub fn new(text: impl Into<String>, passed: bool) -> Self {
        Self {
            text: text.into(),
            passed,
        }
    }

    /// Creates a passing output.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

/// Type alias for command execution results.
pub type CommandResult = Result<CommandOutput, CliError>;

/// Declaration of a single positional argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "path", "dir").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A file system path.
    Path,
}

/// A boolean switch such as `--strict` or `--user`/`-u`.
#[derive(Debug, Clone)]
pub struct CommandFlag {
    /// Long name without the leading dashes.
    pub long: String,

    /// Optional one-letter short form.
    pub short: Option<char>,

    /// Human-readable description of the switch.
    pub description: String,
}

impl CommandFlag {
    /// Whether `arg` spells this flag in its long or short form.
    pub fn matches(&self, arg: &str) -> bool {
        if let Some(long) = arg.strip_prefix("--") {
            return long == self.long;
        }

        match (arg.strip_prefix('-'), self.short) {
            (Some(short), Some(expected)) => {
                let mut chars = short.chars();
                chars.next() == Some(expected) && chars.next().is_none()
            }
            _ => false,
        }
    }
}

/// Complete metadata for a CLI command.
///
/// The registry uses this for alias lookup, argument validation and help
/// generation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "validate", "niri").
    pub name: String,

    /// Alternative names resolving to the same command.
    pub aliases: Vec<String>,

    /// Brief description of what this command does.
    pub description: String,

    /// Positional arguments, in order.
    pub args: Vec<CommandArg>,

    /// Boolean switches the command accepts.
    pub flags: Vec<CommandFlag>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,
}

/// Arguments after validation against a command's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    positional: Vec<String>,
    flags: Vec<String>,
}

impl ParsedArgs {
    /// Creates a parsed argument set from already separated parts.
    ///
    /// `flags` holds long flag names without dashes.
    pub fn new(positional: Vec<String>, flags: Vec<String>) -> Self {
        Self { positional, flags }
    }

    /// The positional argument at `index`, if given.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Whether the flag with long name `long` was given.
    pub fn flag(&self, long: &str) -> bool {
        self.flags.iter().any(|flag| flag == long)
    }
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their arguments already checked against
/// [`Command::metadata`]: positional counts are in range and every flag is
/// one the command declared.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError` when the command cannot produce a report, e.g. for
    /// an unknown schema name or an output directory that cannot be created.
    fn execute(&self, args: &ParsedArgs) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
