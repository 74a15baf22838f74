//! Declarative schema data model.
//!
//! Every configuration domain is described by a tree of [`SchemaNode`]s: an
//! explicit kind tag plus its constraints and optional default. Nodes are
//! plain data, built once through the builder functions below and only read
//! afterwards by the validator, the default materializer and the exporters.
//!
//! ```rust
//! use voidance_config::schema::{boolean, integer, object, one_of};
//!
//! let cursor = object()
//!     .field("size", integer().range(8.0, 128.0).default(24))
//!     .field("blink", boolean().default(false))
//!     .optional("style", one_of(["block", "beam", "underline"]));
//!
//! assert_eq!(cursor.fields().len(), 3);
//! ```

mod json_schema;
mod node;

pub use node::{
    Field, NumberRules, ObjectRules, Presence, SchemaKind, SchemaNode, SequenceRules,
    StringRules, TaggedRules, UnknownKeys, Variant, array, boolean, integer, literal, number,
    object, one_of, record, string, tagged, tuple, union,
};
