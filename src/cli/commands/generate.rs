use std::{fs, path::Path};

use tracing::{info, warn};

use super::PROGRAM;
use crate::{
    cli::{
        CommandResult,
        report::{FAIL, PASS, Report},
        types::{ArgType, Command, CommandArg, CommandMetadata, CommandOutput, ParsedArgs},
    },
    config::{Domain, SchemaRegistry},
    error::{ConfigError, Result},
};

/// Writes the default document of every generated domain as pretty JSON.
///
/// A file that cannot be materialized or written is reported and makes the
/// command fail, but does not stop the remaining files.
pub struct GenerateCommand;

impl Command for GenerateCommand {
    fn execute(&self, args: &ParsedArgs) -> CommandResult {
        let dir = Path::new(args.positional(0).unwrap_or("."));

        let mut report = Report::new();
        report.heading("Generating Default Configuration Files");
        report.line(format!("Output directory: {}", dir.display()));

        fs::create_dir_all(dir).map_err(|e| ConfigError::io(e, dir))?;

        let mut all_written = true;
        for domain in Domain::generated() {
            let Some(file) = domain.output_file else {
                continue;
            };
            let path = dir.join(file);

            match write_defaults(domain.name, &path) {
                Ok(()) => {
                    info!(domain = domain.name, path = %path.display(), "Defaults written");
                    report.mark(PASS, format!("Generated: {}", path.display()));
                }
                Err(e) => {
                    warn!(domain = domain.name, error = %e, "Defaults not written");
                    report.mark(FAIL, format!("Failed to generate {file}: {e}"));
                    all_written = false;
                }
            }
        }

        report.blank();
        if all_written {
            report.mark(PASS, "All default configuration files generated successfully!");
        } else {
            report.mark(FAIL, "Some configuration files could not be generated");
        }

        Ok(CommandOutput::new(report.into_text(), all_written))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "generate".to_string(),
            aliases: vec!["defaults".to_string()],
            description: "Generate default configuration files".to_string(),
            args: vec![CommandArg {
                name: "dir".to_string(),
                description: "Output directory (default: current directory)".to_string(),
                required: false,
                value_type: ArgType::Path,
            }],
            flags: vec![],
            examples: vec![
                format!("{PROGRAM} generate"),
                format!("{PROGRAM} generate ./defaults"),
            ],
        }
    }
}

fn write_defaults(name: &str, path: &Path) -> Result<()> {
    let defaults = SchemaRegistry::global().materialize_defaults(name)?;
    let mut json =
        serde_json::to_string_pretty(&defaults).map_err(|e| ConfigError::Serialize(e.to_string()))?;
    json.push('\n');

    fs::write(path, json).map_err(|e| ConfigError::io(e, path))
}
