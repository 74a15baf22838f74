//! Configuration schemas of the Voidance desktop and its system services.
//!
//! Declares one schema per tool (compositor, bar, launcher, terminal and the
//! six system services), the umbrella records that group them, and the
//! [`SchemaRegistry`] that serves them by name. Also resolves where each
//! domain's file lives and reads it from disk.

mod base;
pub mod components;
mod domains;
mod loading;
mod paths;
mod registry;
pub mod services;
pub mod sway;

pub use domains::Domain;
pub use loading::{
    Document, DocumentFormat, KdlSection, KdlSummary, load_document, parse_document,
};
pub use paths::ConfigPaths;
pub use registry::{SchemaEntry, SchemaRegistry};

#[cfg(test)]
mod tests;
