use std::path::PathBuf;

use super::{PROGRAM, strict_flag};
use crate::{
    cli::{
        CommandResult,
        check::check_domain,
        report::Report,
        types::{ArgType, Command, CommandArg, CommandMetadata, CommandOutput, ParsedArgs},
    },
    config::Domain,
    validation::ValidationOptions,
};

/// Validates a single domain, at its system location or an explicit path.
pub struct DomainCommand {
    domain: &'static Domain,
}

impl DomainCommand {
    /// Creates the command validating `domain`.
    pub fn new(domain: &'static Domain) -> Self {
        Self { domain }
    }
}

impl Command for DomainCommand {
    fn execute(&self, args: &ParsedArgs) -> CommandResult {
        let path = args
            .positional(0)
            .map_or_else(|| self.domain.system_config(), PathBuf::from);
        let options = ValidationOptions {
            closed_world: args.flag("strict"),
        };

        let mut report = Report::new();
        let passed = check_domain(self.domain, &path, options, &mut report);

        Ok(CommandOutput::new(report.into_text(), passed))
    }

    fn metadata(&self) -> CommandMetadata {
        let name = self.domain.name;

        CommandMetadata {
            name: name.to_string(),
            aliases: vec![],
            description: format!("Validate {} configuration", self.domain.title),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: format!("Configuration file (default: {})", self.domain.system_path),
                required: false,
                value_type: ArgType::Path,
            }],
            flags: vec![strict_flag()],
            examples: vec![format!("{PROGRAM} {name} /path/to/config")],
        }
    }
}
