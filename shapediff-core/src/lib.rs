#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod shape;
pub use shape::*;

mod printer;
pub use printer::*;

// Implementations for `core`, `alloc` and `std` types
mod impls;

/// Exposes the structure of a value to the diff engine.
///
/// Implementations describe *what kind* of value `self` is and hand out borrowed
/// references to its children. They are usually derived:
///
/// ```
/// use shapediff_core::{Field, Introspect, Record, Shape, canonical};
///
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// impl Introspect for Version {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Record(Record::new(
///             Some("Version"),
///             vec![Field::named("major", &self.major), Field::named("minor", &self.minor)],
///         ))
///     }
/// }
///
/// let v = Version { major: 1, minor: 4 };
/// assert_eq!(canonical(&v), "Version { major: 1, minor: 4 }");
/// ```
pub trait Introspect {
    /// Returns the shape of this value.
    fn shape(&self) -> Shape<'_>;
}
