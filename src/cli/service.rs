use super::{CommandRegistry, types::CommandMetadata, types::CommandResult};

/// Command run when no arguments are given.
const DEFAULT_COMMAND: &str = "validate";

/// High-level service for executing CLI commands.
///
/// Owns a [`CommandRegistry`] with every built-in command registered and
/// resolves a raw argument list (without the program name) to one of them.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all built-in commands registered.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes the command named by the first argument.
    ///
    /// An empty argument list runs `validate`.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist and
    /// propagates the command's own errors.
    pub fn execute(&self, args: &[String]) -> CommandResult {
        match args.split_first() {
            Some((name, rest)) => self.execute_command(name, rest),
            None => self.execute_command(DEFAULT_COMMAND, &[]),
        }
    }

    /// Executes a command by name or alias with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist.
    pub fn execute_command(&self, name: &str, args: &[String]) -> CommandResult {
        self.registry.execute(name, args)
    }

    /// Metadata of every available command.
    pub fn list_all(&self) -> Vec<CommandMetadata> {
        self.registry.list_commands()
    }

    /// Removes the global `--verbose`/`-v` switch from `args`.
    ///
    /// Returns whether it was present and the remaining arguments, which are
    /// what [`CliService::execute`] expects.
    pub fn split_verbose(args: Vec<String>) -> (bool, Vec<String>) {
        let (verbose, rest): (Vec<String>, Vec<String>) = args
            .into_iter()
            .partition(|arg| arg == "--verbose" || arg == "-v");

        (!verbose.is_empty(), rest)
    }
}

impl Default for CliService {
    fn default() -> Self {
        Self::new()
    }
}
