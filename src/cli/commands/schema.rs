use super::PROGRAM;
use crate::{
    cli::{
        CliError, CommandResult,
        types::{ArgType, Command, CommandArg, CommandMetadata, CommandOutput, ParsedArgs},
    },
    config::SchemaRegistry,
    error::ConfigError,
};

/// Prints the JSON Schema of a registered schema.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, args: &ParsedArgs) -> CommandResult {
        let name = args.positional(0).ok_or_else(|| {
            CliError::InvalidArguments("Expected <name> argument for 'schema' command".to_string())
        })?;

        let entry = SchemaRegistry::global().entry(name)?;
        let schema = entry.node.to_json_schema(entry.title);
        let text = serde_json::to_string_pretty(schema.as_value())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        Ok(CommandOutput::success(text))
    }

    fn metadata(&self) -> CommandMetadata {
        let names: Vec<&str> = SchemaRegistry::global().names().collect();

        CommandMetadata {
            name: "schema".to_string(),
            aliases: vec![],
            description: "Print the JSON Schema of a registered schema".to_string(),
            args: vec![CommandArg {
                name: "name".to_string(),
                description: format!("One of: {}", names.join(", ")),
                required: true,
                value_type: ArgType::String,
            }],
            flags: vec![],
            examples: vec![
                format!("{PROGRAM} schema idle"),
                format!("{PROGRAM} schema desktop > desktop.schema.json"),
            ],
        }
    }
}
