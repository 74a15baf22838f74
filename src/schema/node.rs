use regex::Regex;
use serde_json::Value;

/// Recursive description of an expected configuration value.
///
/// A node is built once through the builder functions of this module and is
/// never changed afterwards: every modifier consumes the node and returns the
/// refined one. Validation only ever reads it.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    kind: SchemaKind,
    default: Option<Value>,
    description: Option<String>,
}

/// The shape a [`SchemaNode`] accepts, with its kind-specific constraints.
#[derive(Debug, Clone)]
pub enum SchemaKind {
    /// UTF-8 string.
    String(StringRules),
    /// Any JSON number.
    Number(NumberRules),
    /// A JSON number without fractional part.
    Integer(NumberRules),
    /// `true` or `false`.
    Boolean,
    /// Closed set of string literals.
    Enumeration(Vec<String>),
    /// Exactly one constant value.
    Literal(Value),
    /// Fixed-length array with one schema per position.
    Tuple(Vec<SchemaNode>),
    /// Array whose elements all share one schema.
    Sequence(SequenceRules),
    /// Object with arbitrary keys whose values share one schema.
    Mapping(Box<SchemaNode>),
    /// Object with named, declared fields.
    Object(ObjectRules),
    /// First matching alternative wins.
    Union(Vec<SchemaNode>),
    /// Alternatives selected by a literal discriminant field.
    Tagged(TaggedRules),
}

/// Constraints on string values.
#[derive(Debug, Clone, Default)]
pub struct StringRules {
    /// Minimum length in characters.
    pub min_len: Option<usize>,
    /// Regular expression the whole value must match.
    pub pattern: Option<Regex>,
}

/// Bounds on numeric values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberRules {
    /// Inclusive lower bound.
    pub min: Option<f64>,
    /// Exclusive lower bound.
    pub exclusive_min: Option<f64>,
    /// Inclusive upper bound.
    pub max: Option<f64>,
    /// The value must be an exact multiple of this step.
    pub multiple_of: Option<f64>,
}

/// Element schema and length bound of a sequence.
#[derive(Debug, Clone)]
pub struct SequenceRules {
    /// Schema every element is validated against.
    pub items: Box<SchemaNode>,
    /// Minimum number of elements.
    pub min_items: Option<usize>,
}

/// Declared fields of an object and its policy for undeclared keys.
#[derive(Debug, Clone, Default)]
pub struct ObjectRules {
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// What to do with keys that are not declared.
    pub unknown_keys: UnknownKeys,
}

/// Policy for keys present in the input but not declared by the schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Drop them silently from the validated output.
    #[default]
    Ignore,
    /// Report each one as an `UnknownField` violation.
    Reject,
}

/// Discriminated union description.
#[derive(Debug, Clone)]
pub struct TaggedRules {
    /// Name of the discriminant field.
    pub tag: String,
    /// Alternatives in declaration order.
    pub variants: Vec<Variant>,
}

/// One alternative of a discriminated union.
#[derive(Debug, Clone)]
pub struct Variant {
    /// Registry-level name of the variant (e.g. "audio").
    pub name: String,
    /// Value the discriminant field must hold (e.g. "pipewire").
    pub tag_value: String,
    /// Schema of the whole record for this variant.
    pub node: SchemaNode,
}

/// A named object member.
#[derive(Debug, Clone)]
pub struct Field {
    /// Key of the field in the input object.
    pub name: String,
    /// Schema of the field value.
    pub node: SchemaNode,
    optional: bool,
}

/// How an object field behaves when the input does not contain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absence is a `MissingField` violation unless the value materializes.
    Required,
    /// Absence is accepted and the key stays absent.
    Optional,
    /// Absence is replaced by the node default.
    Defaulted,
}

impl Field {
    /// Returns how the field is treated when it is missing from the input.
    pub fn presence(&self) -> Presence {
        if self.node.default.is_some() {
            Presence::Defaulted
        } else if self.optional {
            Presence::Optional
        } else {
            Presence::Required
        }
    }
}

impl SchemaKind {
    /// Short human-readable name of the kind, used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::String(_) => "string",
            SchemaKind::Number(_) => "number",
            SchemaKind::Integer(_) => "integer",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Enumeration(_) => "enum",
            SchemaKind::Literal(_) => "literal",
            SchemaKind::Tuple(_) => "tuple",
            SchemaKind::Sequence(_) => "array",
            SchemaKind::Mapping(_) => "record",
            SchemaKind::Object(_) => "object",
            SchemaKind::Union(_) => "union",
            SchemaKind::Tagged(_) => "tagged union",
        }
    }
}

impl SchemaNode {
    fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            default: None,
            description: None,
        }
    }

    /// The kind and constraints of this node.
    pub fn kind(&self) -> &SchemaKind {
        &self.kind
    }

    /// The value substituted when the input omits this node.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Free-form description used by documentation output.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Declared fields when this node is an object, empty otherwise.
    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            SchemaKind::Object(rules) => &rules.fields,
            _ => &[],
        }
    }

    /// Looks up a declared object field by name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// Picks the variant of a discriminated union that `input` is tagged for.
    ///
    /// Returns `None` when this node is not a discriminated union, when the
    /// input is not an object, or when its discriminant is missing or unknown.
    pub fn select_variant(&self, input: &Value) -> Option<&Variant> {
        let SchemaKind::Tagged(rules) = &self.kind else {
            return None;
        };

        let tag = input.as_object()?.get(&rules.tag)?.as_str()?;
        rules.variants.iter().find(|variant| variant.tag_value == tag)
    }

    /// Sets the value used when the input omits this node.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Attaches a description for documentation output.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Inclusive lower bound for numbers.
    pub fn min(mut self, min: f64) -> Self {
        if let SchemaKind::Number(rules) | SchemaKind::Integer(rules) = &mut self.kind {
            rules.min = Some(min);
        }
        self
    }

    /// Inclusive upper bound for numbers.
    pub fn max(mut self, max: f64) -> Self {
        if let SchemaKind::Number(rules) | SchemaKind::Integer(rules) = &mut self.kind {
            rules.max = Some(max);
        }
        self
    }

    /// Inclusive lower and upper bound for numbers.
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Strictly positive numbers.
    ///
    /// Integers start at 1, floats get an exclusive bound at zero.
    pub fn positive(mut self) -> Self {
        if matches!(self.kind, SchemaKind::Integer(_)) {
            return self.min(1.0);
        }
        if let SchemaKind::Number(rules) = &mut self.kind {
            rules.exclusive_min = Some(0.0);
        }
        self
    }

    /// Numbers must be an exact multiple of `step`.
    pub fn multiple_of(mut self, step: f64) -> Self {
        if let SchemaKind::Number(rules) | SchemaKind::Integer(rules) = &mut self.kind {
            rules.multiple_of = Some(step);
        }
        self
    }

    /// Minimum string length in characters.
    pub fn min_len(mut self, len: usize) -> Self {
        if let SchemaKind::String(rules) = &mut self.kind {
            rules.min_len = Some(len);
        }
        self
    }

    /// Shorthand for `min_len(1)`.
    pub fn non_empty(self) -> Self {
        self.min_len(1)
    }

    /// Regular expression a string must match.
    pub fn pattern(mut self, pattern: &Regex) -> Self {
        if let SchemaKind::String(rules) = &mut self.kind {
            rules.pattern = Some(pattern.clone());
        }
        self
    }

    /// Minimum number of sequence elements.
    pub fn min_items(mut self, count: usize) -> Self {
        if let SchemaKind::Sequence(rules) = &mut self.kind {
            rules.min_items = Some(count);
        }
        self
    }

    /// Adds an object field that must be present unless `node` has a default.
    pub fn field(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.push_field(name.into(), node, false);
        self
    }

    /// Adds an object field that may be absent.
    pub fn optional(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.push_field(name.into(), node, true);
        self
    }

    /// Adds every field of `other` (an object node) to this object.
    ///
    /// Fields already declared on `self` with the same name are replaced.
    pub fn extend(mut self, other: SchemaNode) -> Self {
        if let SchemaKind::Object(rules) = other.kind {
            for field in rules.fields {
                self.push_field(field.name, field.node, field.optional);
            }
        }
        self
    }

    /// Rejects keys that the object does not declare.
    pub fn closed(mut self) -> Self {
        if let SchemaKind::Object(rules) = &mut self.kind {
            rules.unknown_keys = UnknownKeys::Reject;
        }
        self
    }

    /// Adds an alternative to a discriminated union.
    pub fn variant(
        mut self,
        name: impl Into<String>,
        tag_value: impl Into<String>,
        node: SchemaNode,
    ) -> Self {
        if let SchemaKind::Tagged(rules) = &mut self.kind {
            rules.variants.push(Variant {
                name: name.into(),
                tag_value: tag_value.into(),
                node,
            });
        }
        self
    }

    fn push_field(&mut self, name: String, node: SchemaNode, optional: bool) {
        let SchemaKind::Object(rules) = &mut self.kind else {
            return;
        };

        let field = Field {
            name,
            node,
            optional,
        };

        match rules.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => rules.fields.push(field),
        }
    }
}

/// A string value.
pub fn string() -> SchemaNode {
    SchemaNode::new(SchemaKind::String(StringRules::default()))
}

/// Any JSON number.
pub fn number() -> SchemaNode {
    SchemaNode::new(SchemaKind::Number(NumberRules::default()))
}

/// A whole number.
pub fn integer() -> SchemaNode {
    SchemaNode::new(SchemaKind::Integer(NumberRules::default()))
}

/// A boolean.
pub fn boolean() -> SchemaNode {
    SchemaNode::new(SchemaKind::Boolean)
}

/// One of a closed set of string values.
pub fn one_of<I, S>(values: I) -> SchemaNode
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SchemaNode::new(SchemaKind::Enumeration(
        values.into_iter().map(Into::into).collect(),
    ))
}

/// Exactly `value`.
pub fn literal(value: impl Into<Value>) -> SchemaNode {
    SchemaNode::new(SchemaKind::Literal(value.into()))
}

/// A fixed-length array, one schema per position.
pub fn tuple(items: Vec<SchemaNode>) -> SchemaNode {
    SchemaNode::new(SchemaKind::Tuple(items))
}

/// An array of `items`.
pub fn array(items: SchemaNode) -> SchemaNode {
    SchemaNode::new(SchemaKind::Sequence(SequenceRules {
        items: Box::new(items),
        min_items: None,
    }))
}

/// An object with arbitrary keys whose values match `values`.
pub fn record(values: SchemaNode) -> SchemaNode {
    SchemaNode::new(SchemaKind::Mapping(Box::new(values)))
}

/// An object with no declared fields yet; add them with
/// [`SchemaNode::field`] and [`SchemaNode::optional`].
pub fn object() -> SchemaNode {
    SchemaNode::new(SchemaKind::Object(ObjectRules::default()))
}

/// The first of `variants` that accepts the input.
pub fn union(variants: Vec<SchemaNode>) -> SchemaNode {
    SchemaNode::new(SchemaKind::Union(variants))
}

/// A discriminated union keyed by the literal field `tag`; add alternatives
/// with [`SchemaNode::variant`].
pub fn tagged(tag: impl Into<String>) -> SchemaNode {
    SchemaNode::new(SchemaKind::Tagged(TaggedRules {
        tag: tag.into(),
        variants: Vec::new(),
    }))
}
