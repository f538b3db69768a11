#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod diff;
mod line;
mod options;
mod render;

pub use diff::{IntrospectDiff, diff, diff_tree, diff_with};
pub use line::Line;
pub use options::{
    DiffOptions, INDENT_ENV, IndentationStyle, Labels, OptionsError, ParseIndentationStyleError,
    SKIP_COUNT_VALUES_ENV,
};
pub use render::render;

// Re-export the capability so callers only need one import
pub use shapediff_core::Introspect;
