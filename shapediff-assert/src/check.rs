//! Structural sameness checks.

use shapediff_core::Introspect;
use shapediff_diff::{DiffOptions, diff_with};

/// Result of checking two values for differences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sameness {
    /// No difference was found.
    Same,
    /// The values differ, with one rendered message per divergence.
    Different(Vec<String>),
}

impl Sameness {
    /// Returns `true` when no difference was found.
    pub fn is_same(&self) -> bool {
        matches!(self, Sameness::Same)
    }
}

/// Checks two values for structural differences.
///
/// This does not require `PartialEq`: the values are walked through their
/// [`Introspect`] shape.
///
/// ```
/// use shapediff_assert::{Sameness, check_no_difference};
///
/// assert_eq!(check_no_difference(&vec![1, 2], &vec![1, 2]), Sameness::Same);
/// assert!(!check_no_difference(&(1, 2), &(1, 3)).is_same());
/// ```
pub fn check_no_difference<T: Introspect + ?Sized>(expected: &T, received: &T) -> Sameness {
    check_no_difference_with(expected, received, DiffOptions::default())
}

/// Checks two values for structural differences, with custom options.
pub fn check_no_difference_with<T: Introspect + ?Sized>(
    expected: &T,
    received: &T,
    options: DiffOptions,
) -> Sameness {
    let messages = diff_with(expected, received, &options);
    if messages.is_empty() {
        Sameness::Same
    } else {
        Sameness::Different(messages)
    }
}

/// Builds the text reported when an assertion fails.
///
/// The messages are written after a `Found difference for ` header line. Values that
/// are unequal without any structural difference (skipped fields, `NaN`) get a note
/// instead of an empty report.
pub fn failure_message(messages: &[String]) -> String {
    let mut out = String::from("Found difference for \n");
    if messages.is_empty() {
        out.push_str("(values are not equal but have no structural difference)\n");
    }
    for message in messages {
        out.push_str(message);
    }
    out
}
