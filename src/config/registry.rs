use std::sync::LazyLock;

use serde_json::Value;
use tracing::{debug, instrument};

use super::{components, services, sway};
use crate::{
    error::{ConfigError, Result},
    schema::SchemaNode,
    validation::{self, ValidationOptions, ValidationResult},
};

static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::builtin);

/// A schema registered under a stable name.
pub struct SchemaEntry {
    /// Lookup key (e.g. "idle").
    pub name: &'static str,
    /// Display name used in reports and documentation (e.g. "Idle Management").
    pub title: &'static str,
    /// The schema itself.
    pub node: SchemaNode,
}

/// Central registry of every configuration schema.
///
/// Built once on first use and read-only afterwards. Holds the per-domain
/// schemas, the two umbrella records (`desktop`, `services`), the two
/// discriminated records (`component`, `service`) and the standalone `sway`
/// schema.
pub struct SchemaRegistry {
    entries: Vec<SchemaEntry>,
}

impl SchemaRegistry {
    fn builtin() -> Self {
        let entry = |name: &'static str, title: &'static str, node: SchemaNode| SchemaEntry {
            name,
            title,
            node,
        };

        let entries = vec![
            entry("niri", "Niri", components::niri::schema()),
            entry("waybar", "Waybar", components::waybar::schema()),
            entry("wofi", "wofi", components::wofi::schema()),
            entry("ghostty", "Ghostty", components::ghostty::schema()),
            entry("desktop", "Desktop Environment", components::desktop()),
            entry("component", "Desktop Component", components::component()),
            entry("session", "Session", services::session::schema()),
            entry("display", "Display Manager", services::display::schema()),
            entry("network", "Network", services::network::schema()),
            entry("audio", "Audio", services::audio::schema()),
            entry("idle", "Idle Management", services::idle::schema()),
            entry("swaylock", "Swaylock", services::swaylock::schema()),
            entry("services", "System Services", services::services()),
            entry("service", "System Service", services::service()),
            entry("sway", "Sway", sway::schema()),
        ];

        debug!(count = entries.len(), "Schema registry initialised");
        Self { entries }
    }

    /// The process-wide registry.
    pub fn global() -> &'static SchemaRegistry {
        &REGISTRY
    }

    /// All registered schemas in registration order.
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Names of all registered schemas.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Looks up a registered schema together with its metadata.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownSchema`] if `name` is not registered.
    pub fn entry(&self, name: &str) -> Result<&SchemaEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| ConfigError::UnknownSchema {
                name: name.to_string(),
            })
    }

    /// Looks up a registered schema.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownSchema`] if `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&SchemaNode> {
        self.entry(name).map(|entry| &entry.node)
    }

    /// Validates `input` against the schema registered as `name`.
    ///
    /// The outer `Result` fails only for an unknown schema; violations in the
    /// document are reported through the inner [`ValidationResult`].
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownSchema`] if `name` is not registered.
    #[instrument(skip(self, input, options))]
    pub fn validate(
        &self,
        name: &str,
        input: &Value,
        options: ValidationOptions,
    ) -> Result<ValidationResult> {
        let node = self.get(name)?;
        Ok(validation::validate_with(node, input, options))
    }

    /// Builds the complete default document of the schema registered as `name`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownSchema`] for an unknown name and
    /// [`ConfigError::IncompleteDefaults`] when some required field has no
    /// default.
    pub fn materialize_defaults(&self, name: &str) -> Result<Value> {
        let node = self.get(name)?;
        validation::materialize_defaults(node, name)
    }

    /// Name of the variant a discriminated record is routed to, if any.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownSchema`] if `name` is not registered.
    pub fn classify(&self, name: &str, input: &Value) -> Result<Option<&str>> {
        let node = self.get(name)?;
        Ok(node.select_variant(input).map(|variant| variant.name.as_str()))
    }
}
