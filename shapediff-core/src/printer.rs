//! Canonical string rendering of introspectable values.
//!
//! The canonical form doubles as the equality fallback of the diff engine, so it has to
//! be deterministic: map entries and set elements are written in ascending order of
//! their own canonical rendering, never in iteration order.

use core::fmt;

use crate::{Field, Introspect, Shape};

/// Displays a value in canonical form.
///
/// Strings are quoted, containers are written in a `Debug`-like syntax.
#[derive(Clone, Copy)]
pub struct Canonical<'a>(pub &'a dyn Introspect);

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0, Form::Canonical)
    }
}

/// Displays a value the way it reads on its own line of a report.
///
/// Identical to [`Canonical`], except that a top-level string or character is written
/// without quotes. Nested values keep their canonical form.
#[derive(Clone, Copy)]
pub struct Plain<'a>(pub &'a dyn Introspect);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0, Form::Plain)
    }
}

/// Renders a value in canonical form.
pub fn canonical(value: &dyn Introspect) -> String {
    Canonical(value).to_string()
}

/// Renders a value in plain form, see [`Plain`].
pub fn describe(value: &dyn Introspect) -> String {
    Plain(value).to_string()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Form {
    Canonical,
    Plain,
}

fn write_value(f: &mut dyn fmt::Write, value: &dyn Introspect, form: Form) -> fmt::Result {
    match value.shape() {
        Shape::Primitive(scalar) => match form {
            Form::Canonical => scalar.write_canonical(f),
            Form::Plain => scalar.write_plain(f),
        },
        Shape::Record(record) => write_fields(f, record.type_name, &record.fields),
        Shape::Union(union) => write_fields(f, Some(union.case), &union.payload),
        Shape::Optional(Some(wrapped)) => {
            f.write_str("Some(")?;
            write_value(f, wrapped, Form::Canonical)?;
            f.write_char(')')
        }
        Shape::Optional(None) => f.write_str("None"),
        Shape::Sequence(elements) => {
            f.write_char('[')?;
            for (index, element) in elements.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, *element, Form::Canonical)?;
            }
            f.write_char(']')
        }
        Shape::Set(elements) => {
            let mut rendered: Vec<String> = elements.iter().map(|e| canonical(*e)).collect();
            rendered.sort();
            write_braced(f, &rendered)
        }
        Shape::Map(entries) => {
            let mut rendered: Vec<(String, String)> = entries
                .iter()
                .map(|(key, value)| (canonical(*key), canonical(*value)))
                .collect();
            rendered.sort();
            let rendered: Vec<String> = rendered
                .into_iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect();
            write_braced(f, &rendered)
        }
    }
}

fn write_braced(f: &mut dyn fmt::Write, items: &[String]) -> fmt::Result {
    f.write_char('{')?;
    f.write_str(&items.join(", "))?;
    f.write_char('}')
}

fn write_fields(
    f: &mut dyn fmt::Write,
    type_name: Option<&'static str>,
    fields: &[Field<'_>],
) -> fmt::Result {
    if let Some(name) = type_name {
        f.write_str(name)?;
        if fields.is_empty() {
            return Ok(());
        }
    }

    let named = fields.iter().any(|field| field.name.is_some());
    if named {
        if type_name.is_some() {
            f.write_char(' ')?;
        }
        f.write_str("{ ")?;
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ", field.label(index))?;
            write_value(f, field.value, Form::Canonical)?;
        }
        f.write_str(" }")
    } else {
        f.write_char('(')?;
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write_value(f, field.value, Form::Canonical)?;
        }
        // a one-element tuple keeps its trailing comma, like `Debug` does
        if type_name.is_none() && fields.len() == 1 {
            f.write_char(',')?;
        }
        f.write_char(')')
    }
}
