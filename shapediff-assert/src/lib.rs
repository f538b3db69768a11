#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod check;
mod dump;

pub use check::{Sameness, check_no_difference, check_no_difference_with, failure_message};
pub use dump::{dump_diff, dump_diff_eq, dump_diff_to};
pub use shapediff_diff::{DiffOptions, IndentationStyle, Labels, diff};

// =============================================================================
// assert_no_difference! - structural comparison, no PartialEq needed
// =============================================================================

/// Asserts that two values have no structural difference.
///
/// This macro does not require `PartialEq`: both values are walked through their
/// `Introspect` shape. Both values must have the same type.
///
/// # Panics
///
/// Panics if the values differ, listing every divergence.
///
/// # Example
///
/// ```
/// use shapediff_assert::assert_no_difference;
///
/// let x: Option<Vec<u8>> = Some(vec![1, 2]);
/// assert_no_difference!(x, Some(vec![1, 2]));
/// ```
#[macro_export]
macro_rules! assert_no_difference {
    ($expected:expr, $received:expr $(,)?) => {
        match $crate::check_no_difference(&$expected, &$received) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(messages) => {
                panic!(
                    "assertion `assert_no_difference!(expected, received)` failed\n\n{}",
                    $crate::failure_message(&messages)
                );
            }
        }
    };
    ($expected:expr, $received:expr, $($arg:tt)+) => {
        match $crate::check_no_difference(&$expected, &$received) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(messages) => {
                panic!(
                    "assertion `assert_no_difference!(expected, received)` failed: {}\n\n{}",
                    format_args!($($arg)+),
                    $crate::failure_message(&messages)
                );
            }
        }
    };
}

/// Asserts that two values have no structural difference, with custom options.
///
/// Like [`assert_no_difference!`], but the report is rendered with the given
/// [`DiffOptions`].
///
/// # Example
///
/// ```
/// use shapediff_assert::{DiffOptions, IndentationStyle, assert_no_difference_with};
///
/// let options = DiffOptions::new().indentation(IndentationStyle::Tab);
/// assert_no_difference_with!((1, "a"), (1, "a"), options);
/// ```
#[macro_export]
macro_rules! assert_no_difference_with {
    ($expected:expr, $received:expr, $options:expr $(,)?) => {
        match $crate::check_no_difference_with(&$expected, &$received, $options) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(messages) => {
                panic!(
                    "assertion `assert_no_difference_with!(expected, received, options)` failed\n\n{}",
                    $crate::failure_message(&messages)
                );
            }
        }
    };
    ($expected:expr, $received:expr, $options:expr, $($arg:tt)+) => {
        match $crate::check_no_difference_with(&$expected, &$received, $options) {
            $crate::Sameness::Same => {}
            $crate::Sameness::Different(messages) => {
                panic!(
                    "assertion `assert_no_difference_with!(expected, received, options)` failed: {}\n\n{}",
                    format_args!($($arg)+),
                    $crate::failure_message(&messages)
                );
            }
        }
    };
}

/// Asserts that two values have no structural difference (debug builds only).
///
/// Like [`assert_no_difference!`], but only enabled in debug builds.
#[macro_export]
macro_rules! debug_assert_no_difference {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_no_difference!($($arg)*);
        }
    };
}

/// Asserts that two values have no structural difference with custom options (debug
/// builds only).
///
/// Like [`assert_no_difference_with!`], but only enabled in debug builds.
#[macro_export]
macro_rules! debug_assert_no_difference_with {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_no_difference_with!($($arg)*);
        }
    };
}

// =============================================================================
// assert_eq_diff! - PartialEq first, structural report on failure
// =============================================================================

/// Asserts that two values are equal according to `PartialEq`.
///
/// Equality is decided by `==` alone. Only when the values are unequal is the
/// structural diff computed, to explain where they diverge.
///
/// # Example
///
/// ```should_panic
/// use shapediff_assert::assert_eq_diff;
///
/// assert_eq_diff!(vec![1, 2, 3], vec![1, 2, 4]);
/// ```
#[macro_export]
macro_rules! assert_eq_diff {
    ($expected:expr, $received:expr $(,)?) => {
        match (&$expected, &$received) {
            (expected, received) => {
                if !(*expected == *received) {
                    panic!("{}", $crate::failure_message(&$crate::diff(expected, received)));
                }
            }
        }
    };
    ($expected:expr, $received:expr, $($arg:tt)+) => {
        match (&$expected, &$received) {
            (expected, received) => {
                if !(*expected == *received) {
                    panic!(
                        "{}: {}",
                        format_args!($($arg)+),
                        $crate::failure_message(&$crate::diff(expected, received))
                    );
                }
            }
        }
    };
}

/// Asserts that two values are equal according to `PartialEq` (debug builds only).
///
/// Like [`assert_eq_diff!`], but only enabled in debug builds.
#[macro_export]
macro_rules! debug_assert_eq_diff {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_eq_diff!($($arg)*);
        }
    };
}
