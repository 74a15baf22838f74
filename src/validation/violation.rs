use std::fmt;

use serde::{Serialize, Serializer};

/// Category of a single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The value has the wrong runtime shape (e.g. string where a number is expected).
    TypeMismatch,
    /// A number, string length or element count lies outside its closed bounds.
    OutOfRange,
    /// The value is not a member of a closed enumeration or literal set.
    NotInEnumeration,
    /// A required field is absent and cannot be defaulted.
    MissingField,
    /// No alternative of a union accepted the value.
    NoMatchingVariant,
    /// A string pattern or numeric step constraint failed.
    InvalidFormat,
    /// A key is not declared by a closed object schema.
    UnknownField,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViolationKind::TypeMismatch => "type mismatch",
            ViolationKind::OutOfRange => "out of range",
            ViolationKind::NotInEnumeration => "not in enumeration",
            ViolationKind::MissingField => "missing field",
            ViolationKind::NoMatchingVariant => "no matching variant",
            ViolationKind::InvalidFormat => "invalid format",
            ViolationKind::UnknownField => "unknown field",
        };
        f.write_str(name)
    }
}

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

/// Location of a value inside a configuration document.
///
/// Rendered as its segments joined with `.`, for example
/// `settings.outputs.0.name`. The empty path renders as `<root>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The path of the document itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the field `key` below this one.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Path of element `index` below this one.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// The individual segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Whether this is the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }

        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                PathSegment::Key(key) => f.write_str(key)?,
                PathSegment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single mismatch between an input value and its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Where in the document the mismatch occurred.
    pub path: FieldPath,
    /// What kind of mismatch it is.
    pub kind: ViolationKind,
    /// Human-readable explanation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
