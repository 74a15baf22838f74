//! Checking one configuration domain and reporting the outcome.

use std::{io, path::Path};

use serde_json::Value;
use tracing::{info, instrument, warn};

use super::{
    formatting::format_value,
    report::{FAIL, INFO, PASS, Report, WARN},
};
use crate::{
    config::{Document, Domain, KdlSummary, SchemaRegistry, load_document},
    error::ConfigError,
    validation::ValidationOptions,
};

/// Validates the file of `domain` at `path` and appends its section to
/// `report`.
///
/// A missing file is replaced by the domain's defaults and a KDL file only
/// gets a section scan, which always passes. Anything unreadable or
/// unparseable fails the domain.
#[instrument(skip_all, fields(domain = domain.name, path = %path.display()))]
pub(crate) fn check_domain(
    domain: &Domain,
    path: &Path,
    options: ValidationOptions,
    report: &mut Report,
) -> bool {
    section_heading(domain, report);
    report.line(format!("Path: {}", path.display()));

    let passed = match load_document(path, domain.format) {
        Ok(None) => check_defaults(domain, report),
        Ok(Some(Document::Kdl(summary))) => {
            report_kdl(&summary, report);
            true
        }
        Ok(Some(Document::Structured(value))) => check_document(domain, &value, options, report),
        Err(e) => {
            warn!(error = %e, "Configuration could not be read");
            report.mark(FAIL, e);
            false
        }
    };

    info!(passed, "Domain checked");
    passed
}

/// Reports a domain whose file location could not be resolved.
///
/// Always fails the domain; the other domains of the run are unaffected.
#[instrument(skip_all, fields(domain = domain.name))]
pub(crate) fn report_unresolved(domain: &Domain, error: &io::Error, report: &mut Report) -> bool {
    warn!(error = %error, "Configuration path could not be resolved");
    section_heading(domain, report);
    report.mark(FAIL, error);
    false
}

fn section_heading(domain: &Domain, report: &mut Report) {
    report.blank();
    report.heading(&format!("Validating {} Configuration", domain.title));
}

fn check_defaults(domain: &Domain, report: &mut Report) -> bool {
    report.mark(WARN, "Configuration file not found, using defaults");

    match SchemaRegistry::global().materialize_defaults(domain.name) {
        Ok(_) => {
            report.mark(PASS, "Default configuration is valid");
            true
        }
        Err(ConfigError::IncompleteDefaults { violations, .. }) => {
            report.mark(FAIL, "Default configuration is invalid:");
            report.violations(&violations);
            false
        }
        Err(e) => {
            report.mark(FAIL, e);
            false
        }
    }
}

fn check_document(
    domain: &Domain,
    value: &Value,
    options: ValidationOptions,
    report: &mut Report,
) -> bool {
    match SchemaRegistry::global().validate(domain.name, value, options) {
        Ok(Ok(validated)) => {
            report.mark(PASS, format!("{} configuration is valid", domain.title));
            highlights(domain.name, &validated, report);
            true
        }
        Ok(Err(violations)) => {
            report.mark(FAIL, format!("{} configuration is invalid:", domain.title));
            report.violations(&violations);
            false
        }
        Err(e) => {
            report.mark(FAIL, e);
            false
        }
    }
}

fn report_kdl(summary: &KdlSummary, report: &mut Report) {
    report.mark(INFO, "KDL configuration detected - basic validation only");

    for section in &summary.sections {
        if section.found {
            report.mark(PASS, format!("{} found", section.name));
        } else {
            report.mark(WARN, format!("{} not found", section.name));
        }
    }

    report.line(format!(
        "Basic validation: {}/{} sections found",
        summary.found(),
        summary.expected()
    ));
}

fn field(value: &Value, pointer: &str) -> Option<String> {
    value.pointer(pointer).map(format_value)
}

fn highlights(domain: &str, value: &Value, report: &mut Report) {
    match domain {
        "waybar" => waybar_highlights(value, report),
        "wofi" => wofi_highlights(value, report),
        "ghostty" => ghostty_highlights(value, report),
        "desktop" => desktop_highlights(value, report),
        "services" => services_highlights(value, report),
        _ => {}
    }
}

fn waybar_highlights(value: &Value, report: &mut Report) {
    for (side, key) in [
        ("Left", "modules-left"),
        ("Center", "modules-center"),
        ("Right", "modules-right"),
    ] {
        let modules = value
            .pointer(&format!("/settings/{key}"))
            .and_then(Value::as_array)
            .filter(|modules| !modules.is_empty());

        if let Some(modules) = modules {
            let names: Vec<String> = modules.iter().map(format_value).collect();
            report.mark(PASS, format!("{side} modules configured: {}", names.join(", ")));
        }
    }
}

fn wofi_highlights(value: &Value, report: &mut Report) {
    for (label, pointer) in [
        ("Mode", "/settings/mode"),
        ("Terminal", "/settings/term"),
        ("Width", "/settings/width"),
        ("Height", "/settings/height"),
        ("Location", "/settings/location"),
    ] {
        if let Some(text) = field(value, pointer) {
            report.mark(PASS, format!("{label}: {text}"));
        }
    }
}

fn ghostty_highlights(value: &Value, report: &mut Report) {
    if value.get("settings").is_none() {
        return;
    }
    report.mark(PASS, "Settings configured");

    if let (Some(family), Some(size)) = (
        field(value, "/settings/font/family"),
        field(value, "/settings/font/size"),
    ) {
        report.detail(format!("Font family: {family}"));
        report.detail(format!("Font size: {size}"));
    }
    if let Some(theme) = field(value, "/settings/theme") {
        report.detail(format!("Theme: {theme}"));
    }
    if let (Some(width), Some(height)) = (
        field(value, "/settings/window/width"),
        field(value, "/settings/window/height"),
    ) {
        report.detail(format!("Window size: {width}x{height}"));
    }
    if let (Some(backend), Some(gpu)) = (
        field(value, "/settings/render/backend"),
        field(value, "/settings/render/gpu-acceleration"),
    ) {
        report.detail(format!("Render backend: {backend}"));
        report.detail(format!("GPU acceleration: {gpu}"));
    }
}

fn desktop_highlights(value: &Value, report: &mut Report) {
    if let Some(components) = value.get("components") {
        for (key, title) in [
            ("niri", "Niri"),
            ("waybar", "Waybar"),
            ("wofi", "wofi"),
            ("ghostty", "Ghostty"),
        ] {
            if components.get(key).is_some() {
                report.mark(PASS, format!("{title} component configured"));
            }
        }
    }

    if value.get("global").is_some() {
        report.mark(PASS, "Global settings configured");
        for (label, pointer) in [
            ("Log level", "/global/log-level"),
            ("Auto start", "/global/auto-start"),
            ("Hardware detection", "/global/hardware-detection"),
        ] {
            if let Some(text) = field(value, pointer) {
                report.detail(format!("{label}: {text}"));
            }
        }
    }
}

fn services_highlights(value: &Value, report: &mut Report) {
    if let Some(services) = value.get("services").and_then(Value::as_object) {
        for name in services.keys() {
            let title = Domain::find(name).map_or(name.as_str(), |domain| domain.title);
            report.mark(PASS, format!("{title} service configured"));
        }
    }

    if value.get("global").is_some() {
        report.mark(PASS, "Global settings configured");
        if let Some(level) = field(value, "/global/log_level") {
            report.detail(format!("Log level: {level}"));
        }
        if let Some(timeout) = field(value, "/global/service_timeout") {
            report.detail(format!("Service timeout: {timeout}s"));
        }
    }
}
