use tracing::info;

use super::{PROGRAM, strict_flag};
use crate::{
    cli::{
        CommandResult,
        check::{check_domain, report_unresolved},
        report::{FAIL, PASS, Report},
        types::{Command, CommandFlag, CommandMetadata, CommandOutput, ParsedArgs},
    },
    config::Domain,
    validation::ValidationOptions,
};

/// Validates every desktop domain at its system or user location.
///
/// # Example Usage
///
/// ```bash
/// voidance-config validate
/// voidance-config check --user --strict
/// ```
pub struct ValidateCommand;

impl Command for ValidateCommand {
    fn execute(&self, args: &ParsedArgs) -> CommandResult {
        let user = args.flag("user");
        let options = ValidationOptions {
            closed_world: args.flag("strict"),
        };

        let mut report = Report::new();
        report.heading("Voidance Desktop Environment Configuration Validation");
        report.line(if user {
            "Mode: User configurations only"
        } else {
            "Mode: System configurations"
        });

        let mut total = 0;
        let mut passed = 0;
        for domain in Domain::validated_by_default() {
            total += 1;
            let ok = match domain.config_path(user) {
                Ok(path) => check_domain(domain, &path, options, &mut report),
                Err(e) => report_unresolved(domain, &e, &mut report),
            };
            if ok {
                passed += 1;
            }
        }

        report.blank();
        report.heading("Validation Summary");
        report.line(format!("Passed: {passed}/{total} configurations"));

        let all_passed = passed == total;
        if all_passed {
            report.mark(PASS, "All configurations are valid!");
        } else {
            report.mark(FAIL, "Some configurations have issues");
        }

        info!(passed, total, user, "Validation finished");
        Ok(CommandOutput::new(report.into_text(), all_passed))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "validate".to_string(),
            aliases: vec!["check".to_string()],
            description: "Validate all desktop configurations".to_string(),
            args: vec![],
            flags: vec![
                CommandFlag {
                    long: "user".to_string(),
                    short: Some('u'),
                    description: "Validate user configurations instead of system".to_string(),
                },
                strict_flag(),
            ],
            examples: vec![
                format!("{PROGRAM} validate"),
                format!("{PROGRAM} validate --user"),
                format!("{PROGRAM} check --strict"),
            ],
        }
    }
}
