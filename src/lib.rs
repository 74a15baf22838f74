//! Voidance configuration - schemas, validation and defaults for the Voidance desktop.
//!
//! Every configurable tool of the desktop (the niri compositor, the waybar
//! status bar, the wofi launcher, the ghostty terminal, the system services
//! and sway) is described by a declarative schema. The crate validates
//! documents against those schemas, reports every violation with its path,
//! fills in defaults, and materializes complete default documents.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use voidance_config::config::SchemaRegistry;
//! use voidance_config::validation::ValidationOptions;
//!
//! let registry = SchemaRegistry::global();
//!
//! let idle = registry
//!     .validate("idle", &json!({ "settings": {} }), ValidationOptions::default())?
//!     .map_err(|violations| format!("{violations:?}"))?;
//! assert_eq!(idle["settings"]["timeouts"]["idle"], json!(300));
//!
//! let defaults = registry.materialize_defaults("waybar")?;
//! assert_eq!(defaults["service"], json!("waybar"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Command-line interface for validating and generating configurations.
pub mod cli;

/// Desktop and service schemas, the schema registry and file loading.
pub mod config;

/// Markdown reference generation for the registered schemas.
pub mod docs;

/// Core error types and result aliases.
pub mod error;

/// Declarative schema nodes and their JSON Schema export.
pub mod schema;

/// Tracing subscriber setup for the binaries.
pub mod tracing_config;

/// The validation engine, violations and default materialization.
pub mod validation;

/// Re-exported core types for convenience.
pub use error::{ConfigError, Result};
