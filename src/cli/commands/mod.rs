//! Built-in commands.
mod domain;
mod generate;
mod help;
mod schema;
mod validate;

pub use domain::DomainCommand;
pub use generate::GenerateCommand;
pub use help::HelpCommand;
pub use schema::SchemaCommand;
pub use validate::ValidateCommand;

use crate::{
    cli::{CommandRegistry, types::CommandFlag},
    config::Domain,
};

/// Name the binary is installed under, used in examples.
const PROGRAM: &str = "voidance-config";

/// Registers every built-in command with the registry.
///
/// Registration order is help order: the whole-desktop commands first, one
/// command per domain, `schema`, and finally `help`, which is built from the
/// metadata of everything registered before it.
pub fn register_commands(registry: &mut CommandRegistry) {
    registry.register_command(Box::new(ValidateCommand));
    registry.register_command(Box::new(GenerateCommand));

    for domain in Domain::all() {
        registry.register_command(Box::new(DomainCommand::new(domain)));
    }

    registry.register_command(Box::new(SchemaCommand));

    let commands = registry.list_commands();
    registry.register_command(Box::new(HelpCommand::new(commands)));
}

fn strict_flag() -> CommandFlag {
    CommandFlag {
        long: "strict".to_string(),
        short: None,
        description: "Reject keys the schema does not declare".to_string(),
    }
}
