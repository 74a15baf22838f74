//! Command-line interface for validating and generating configurations.
//!
//! Commands are registered by name and alias in a flat registry and produce
//! a plain-text report plus a pass/fail verdict, which the binary turns into
//! its exit code. Usage text is generated from command metadata.

mod check;
pub mod commands;
pub mod formatting;
mod registry;
pub mod report;
mod service;
mod types;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{
    ArgType, CliError, Command, CommandArg, CommandFlag, CommandMetadata, CommandOutput,
    CommandResult, ParsedArgs,
};
