//! # Schema Nodes
//!
//! The schema tree is plain data: a [`SchemaNode`] enum tagged by the JSON
//! type it accepts, carrying only the constraints that make sense for that
//! type. The structural validator walks it with a single recursive match.
//!
//! Trees are assembled with the builder methods below and stored in
//! process-wide `Lazy` statics; nothing mutates them after construction.

use crate::pattern::ValuePattern;

/// Allowed shape at one position of a manifest tree.
#[derive(Debug)]
pub enum SchemaNode {
    /// A JSON object with declared and/or pattern-keyed properties.
    Object(ObjectNode),
    /// A JSON array with an item schema and optional uniqueness.
    Array(ArrayNode),
    /// A JSON string, optionally constrained by pattern and enumeration.
    String(StringNode),
    /// Any JSON number.
    Number,
    /// `true` or `false`.
    Boolean,
}

impl SchemaNode {
    /// Start an object node. Undeclared properties are allowed until
    /// [`ObjectNode::deny_additional`] is called.
    pub fn object() -> ObjectNode {
        ObjectNode {
            properties: Vec::new(),
            pattern_properties: Vec::new(),
            additional_properties: true,
        }
    }

    /// Start an array node whose items all validate against `items`.
    pub fn array_of(items: impl Into<SchemaNode>) -> ArrayNode {
        ArrayNode {
            items: Box::new(items.into()),
            unique_items: false,
        }
    }

    /// Start an unconstrained string node.
    pub fn string() -> StringNode {
        StringNode {
            pattern: None,
            allowed: None,
        }
    }

    /// The object constraints, if this is an object node.
    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Self::Object(node) => Some(node),
            _ => None,
        }
    }

    /// JSON type name this node accepts, as used in violation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::String(_) => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// Constraints for an object node.
#[derive(Debug)]
pub struct ObjectNode {
    pub(crate) properties: Vec<PropertySchema>,
    pub(crate) pattern_properties: Vec<PatternProperty>,
    pub(crate) additional_properties: bool,
}

/// A declared property of an object node.
#[derive(Debug)]
pub struct PropertySchema {
    pub(crate) name: &'static str,
    pub(crate) required: bool,
    pub(crate) schema: SchemaNode,
}

/// Sub-schema applied to every key that matches `key_pattern`.
#[derive(Debug)]
pub struct PatternProperty {
    pub(crate) key_pattern: &'static ValuePattern,
    pub(crate) schema: SchemaNode,
}

impl ObjectNode {
    /// Declare an optional property.
    pub fn optional(mut self, name: &'static str, schema: impl Into<SchemaNode>) -> Self {
        self.properties.push(PropertySchema {
            name,
            required: false,
            schema: schema.into(),
        });
        self
    }

    /// Declare a required property.
    pub fn required(mut self, name: &'static str, schema: impl Into<SchemaNode>) -> Self {
        self.properties.push(PropertySchema {
            name,
            required: true,
            schema: schema.into(),
        });
        self
    }

    /// Validate every key matching `key_pattern` against `schema`.
    pub fn pattern_property(
        mut self,
        key_pattern: &'static ValuePattern,
        schema: impl Into<SchemaNode>,
    ) -> Self {
        self.pattern_properties.push(PatternProperty {
            key_pattern,
            schema: schema.into(),
        });
        self
    }

    /// Reject keys that are neither declared nor matched by a key pattern.
    pub fn deny_additional(mut self) -> Self {
        self.additional_properties = false;
        self
    }

    /// Look up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Names of the required properties, in declaration order.
    pub fn required_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().filter(|p| p.required).map(|p| p.name)
    }
}

impl PropertySchema {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn schema(&self) -> &SchemaNode {
        &self.schema
    }
}

/// Constraints for an array node.
#[derive(Debug)]
pub struct ArrayNode {
    pub(crate) items: Box<SchemaNode>,
    pub(crate) unique_items: bool,
}

impl ArrayNode {
    /// Require all items to be pairwise distinct (deep equality).
    pub fn unique(mut self) -> Self {
        self.unique_items = true;
        self
    }
}

/// Constraints for a string node.
#[derive(Debug)]
pub struct StringNode {
    pub(crate) pattern: Option<&'static ValuePattern>,
    pub(crate) allowed: Option<&'static [&'static str]>,
}

impl StringNode {
    /// Require the value to match `pattern`.
    pub fn matching(mut self, pattern: &'static ValuePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Require the value to be one of `allowed`.
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }
}

impl From<ObjectNode> for SchemaNode {
    fn from(node: ObjectNode) -> Self {
        Self::Object(node)
    }
}

impl From<ArrayNode> for SchemaNode {
    fn from(node: ArrayNode) -> Self {
        Self::Array(node)
    }
}

impl From<StringNode> for SchemaNode {
    fn from(node: StringNode) -> Self {
        Self::String(node)
    }
}
