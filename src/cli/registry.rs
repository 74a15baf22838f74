use std::collections::HashMap;

use tracing::debug;

use super::{
    CliError, Command, commands,
    types::{CommandMetadata, CommandResult, ParsedArgs},
};

/// Registry of CLI commands keyed by name and alias.
///
/// Commands are kept in registration order, which is also the order help
/// lists them in. Every name and alias of a command maps to its slot, so
/// `check` and `validate` resolve to the same implementation.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    lookup: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Registers a command under its name and every alias.
    ///
    /// A later registration claiming the same name replaces the earlier one
    /// for that name.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        let metadata = command.metadata();
        let slot = self.commands.len();

        for name in std::iter::once(&metadata.name).chain(&metadata.aliases) {
            self.lookup.insert(name.clone(), slot);
        }

        self.commands.push(command);
    }

    /// Executes a command by name or alias with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if nothing is registered under
    /// `name`, `CliError::InvalidArguments` if `args` do not fit the
    /// command's metadata, and whatever the command itself returns.
    pub fn execute(&self, name: &str, args: &[String]) -> CommandResult {
        let command = self
            .find(name)
            .ok_or_else(|| CliError::CommandNotFound(name.to_string()))?;

        let metadata = command.metadata();
        let parsed = Self::parse_args(&metadata, args)?;

        debug!(command = %metadata.name, ?parsed, "Executing command");
        command.execute(&parsed)
    }

    /// The command registered under `name`, if any.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.lookup
            .get(name)
            .and_then(|slot| self.commands.get(*slot))
            .map(|command| &**command)
    }

    /// Metadata of every registered command in registration order.
    pub fn list_commands(&self) -> Vec<CommandMetadata> {
        self.commands
            .iter()
            .map(|command| command.metadata())
            .collect()
    }

    fn parse_args(metadata: &CommandMetadata, args: &[String]) -> Result<ParsedArgs, CliError> {
        let mut positional = Vec::new();
        let mut flags = Vec::new();

        for arg in args {
            if arg.len() > 1 && arg.starts_with('-') {
                let flag = metadata
                    .flags
                    .iter()
                    .find(|flag| flag.matches(arg))
                    .ok_or_else(|| {
                        CliError::InvalidArguments(format!(
                            "Unknown option '{arg}' for '{}'",
                            metadata.name
                        ))
                    })?;
                flags.push(flag.long.clone());
            } else {
                positional.push(arg.clone());
            }
        }

        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if positional.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                positional.len(),
            )));
        }

        if positional.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                positional.len(),
            )));
        }

        Ok(ParsedArgs::new(positional, flags))
    }

    /// Registers every built-in command.
    ///
    /// Help is registered last so it can list everything before it.
    pub fn register_all_commands(&mut self) {
        commands::register_commands(self);
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
