use super::PROGRAM;
use crate::{
    cli::{
        CommandResult,
        formatting::{format_command, format_description, format_header, format_subheader},
        types::{Command, CommandMetadata, CommandOutput, ParsedArgs},
    },
    config::Domain,
};

/// Prints usage text for every command registered before it.
pub struct HelpCommand {
    commands: Vec<CommandMetadata>,
}

impl HelpCommand {
    /// Creates the help command listing `commands`.
    pub fn new(commands: Vec<CommandMetadata>) -> Self {
        Self { commands }
    }

    fn render(&self) -> String {
        let usages: Vec<String> = self.commands.iter().map(usage).collect();
        let width = usages.iter().map(String::len).max().unwrap_or(0);

        let mut lines = vec![
            format_header("Voidance Configuration Validation Tool"),
            String::new(),
            format_subheader("Usage:"),
            format!("  {PROGRAM} <command> [options]"),
            String::new(),
            format_subheader("Commands:"),
        ];

        for (metadata, usage) in self.commands.iter().zip(&usages) {
            lines.push(format!(
                "  {}  {}",
                format_command(&format!("{usage:<width$}")),
                format_description(&metadata.description)
            ));
        }
        lines.push(format!(
            "  {}  {}",
            format_command(&format!("{:<width$}", "help, --help, -h")),
            format_description("Show this help message")
        ));

        lines.extend([
            String::new(),
            format_subheader("Global options:"),
            format!(
                "  {}  {}",
                format_command("--verbose, -v"),
                format_description("Log debug output to stderr")
            ),
            String::new(),
            format_subheader("Examples:"),
        ]);

        let mut domain_shown = false;
        for metadata in &self.commands {
            if Domain::find(&metadata.name).is_some() {
                if domain_shown {
                    continue;
                }
                domain_shown = true;
            }
            lines.extend(metadata.examples.iter().map(|example| format!("  {example}")));
        }

        lines.join("\n")
    }
}

fn usage(metadata: &CommandMetadata) -> String {
    let mut parts = vec![
        std::iter::once(&metadata.name)
            .chain(&metadata.aliases)
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
    ];

    parts.extend(metadata.args.iter().map(|arg| {
        if arg.required {
            format!("<{}>", arg.name)
        } else {
            format!("[{}]", arg.name)
        }
    }));

    parts.extend(metadata.flags.iter().map(|flag| match flag.short {
        Some(short) => format!("[--{}|-{short}]", flag.long),
        None => format!("[--{}]", flag.long),
    }));

    parts.join(" ")
}

impl Command for HelpCommand {
    fn execute(&self, _args: &ParsedArgs) -> CommandResult {
        Ok(CommandOutput::success(self.render()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "help".to_string(),
            aliases: vec!["--help".to_string(), "-h".to_string()],
            description: "Show this help message".to_string(),
            args: vec![],
            flags: vec![],
            examples: vec![format!("{PROGRAM} help")],
        }
    }
}
