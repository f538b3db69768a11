use core::fmt;

use crate::Introspect;

/// The structural category of a value, along with borrowed access to its children.
///
/// A shape is derived on demand by [`Introspect::shape`] and only lives as long as the
/// value it was taken from. It is the only thing the diff engine ever inspects.
pub enum Shape<'a> {
    /// A leaf value with no introspectable children.
    Primitive(Scalar<'a>),

    /// An aggregate with a fixed set of fields (structs, tuple structs, tuples).
    Record(Record<'a>),

    /// An ordered collection whose elements are compared by position.
    Sequence(Vec<&'a dyn Introspect>),

    /// An associative container. Keys are identified by their canonical rendering.
    Map(Vec<(&'a dyn Introspect, &'a dyn Introspect)>),

    /// An unordered collection. Elements are identified by their canonical rendering.
    Set(Vec<&'a dyn Introspect>),

    /// A value that may be absent.
    Optional(Option<&'a dyn Introspect>),

    /// A value that is exactly one of several named cases.
    Union(Union<'a>),
}

/// Field-less discriminant of [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// See [`Shape::Primitive`].
    Primitive,
    /// See [`Shape::Record`].
    Record,
    /// See [`Shape::Sequence`].
    Sequence,
    /// See [`Shape::Map`].
    Map,
    /// See [`Shape::Set`].
    Set,
    /// See [`Shape::Optional`].
    Optional,
    /// See [`Shape::Union`].
    Union,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Primitive => "primitive",
            ShapeKind::Record => "record",
            ShapeKind::Sequence => "sequence",
            ShapeKind::Map => "map",
            ShapeKind::Set => "set",
            ShapeKind::Optional => "optional",
            ShapeKind::Union => "union",
        };
        f.write_str(name)
    }
}

impl Shape<'_> {
    /// Returns the discriminant of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Primitive(_) => ShapeKind::Primitive,
            Shape::Record(_) => ShapeKind::Record,
            Shape::Sequence(_) => ShapeKind::Sequence,
            Shape::Map(_) => ShapeKind::Map,
            Shape::Set(_) => ShapeKind::Set,
            Shape::Optional(_) => ShapeKind::Optional,
            Shape::Union(_) => ShapeKind::Union,
        }
    }

    /// Number of introspectable children.
    ///
    /// Primitives have none, an absent optional has none and a present one has one.
    pub fn child_count(&self) -> usize {
        match self {
            Shape::Primitive(_) => 0,
            Shape::Record(record) => record.fields.len(),
            Shape::Sequence(elements) | Shape::Set(elements) => elements.len(),
            Shape::Map(entries) => entries.len(),
            Shape::Optional(wrapped) => usize::from(wrapped.is_some()),
            Shape::Union(union) => union.payload.len(),
        }
    }

    /// Whether this is a sequence, map or set.
    ///
    /// Empty collections have no children but are still not leaves: two of them of
    /// different sizes are a count mismatch rather than a plain value mismatch.
    pub fn is_collection(&self) -> bool {
        matches!(self, Shape::Sequence(_) | Shape::Map(_) | Shape::Set(_))
    }
}

/// A leaf value.
#[derive(Clone, Copy)]
pub enum Scalar<'a> {
    /// Textual data. Quoted in canonical form, written raw when displayed on its own.
    Text(&'a str),
    /// A single character, treated like [`Scalar::Text`].
    Char(char),
    /// Anything else, rendered through its `Debug` implementation.
    Other(&'a dyn fmt::Debug),
}

impl Scalar<'_> {
    /// Writes the canonical form.
    pub fn write_canonical(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{text:?}"),
            Scalar::Char(c) => write!(f, "{c:?}"),
            Scalar::Other(value) => write!(f, "{value:?}"),
        }
    }

    /// Writes the plain form: text without quotes, everything else as in canonical form.
    pub fn write_plain(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Char(c) => f.write_char(*c),
            Scalar::Other(value) => write!(f, "{value:?}"),
        }
    }
}

/// A named or positional child of a [`Record`] or a [`Union`] payload.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// The field name, `None` for positional fields.
    pub name: Option<&'static str>,
    /// The field value.
    pub value: &'a dyn Introspect,
}

impl<'a> Field<'a> {
    /// A field with a name, as in `struct Point { x: i32 }`.
    pub fn named(name: &'static str, value: &'a dyn Introspect) -> Self {
        Self {
            name: Some(name),
            value,
        }
    }

    /// A field addressed by position, as in `struct Point(i32)`.
    pub fn positional(value: &'a dyn Introspect) -> Self {
        Self { name: None, value }
    }

    /// The label used to address this field: its name, or `.index` for positional fields.
    pub fn label(&self, index: usize) -> String {
        match self.name {
            Some(name) => name.to_owned(),
            None => format!(".{index}"),
        }
    }
}

/// A named-field aggregate.
pub struct Record<'a> {
    /// The type name, `None` for anonymous tuples.
    pub type_name: Option<&'static str>,
    /// Fields in declaration order.
    pub fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    /// Creates a record shape.
    pub fn new(type_name: Option<&'static str>, fields: Vec<Field<'a>>) -> Self {
        Self { type_name, fields }
    }

    /// Creates the shape of an anonymous tuple.
    pub fn tuple(fields: Vec<Field<'a>>) -> Self {
        Self {
            type_name: None,
            fields,
        }
    }
}

/// One case of a tagged union, with its payload.
pub struct Union<'a> {
    /// The name of the enum type.
    pub type_name: &'static str,
    /// The label of the active case.
    pub case: &'static str,
    /// The payload slots, empty for unit cases.
    pub payload: Vec<Field<'a>>,
}

impl<'a> Union<'a> {
    /// Creates a union shape.
    pub fn new(type_name: &'static str, case: &'static str, payload: Vec<Field<'a>>) -> Self {
        Self {
            type_name,
            case,
            payload,
        }
    }
}
