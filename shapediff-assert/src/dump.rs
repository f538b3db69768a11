//! Writing reports instead of panicking.

use std::io;

use shapediff_core::Introspect;
use shapediff_diff::{DiffOptions, diff_with};

/// Writes every difference between two values to `writer`.
///
/// Returns how many messages were written, zero when the values do not differ.
pub fn dump_diff_to<T: Introspect + ?Sized>(
    expected: &T,
    received: &T,
    options: &DiffOptions,
    mut writer: impl io::Write,
) -> io::Result<usize> {
    let messages = diff_with(expected, received, options);
    for message in &messages {
        writer.write_all(message.as_bytes())?;
    }
    writer.flush()?;
    Ok(messages.len())
}

/// Writes every difference between two values to stderr, with default options.
pub fn dump_diff<T: Introspect + ?Sized>(expected: &T, received: &T) -> io::Result<usize> {
    dump_diff_to(expected, received, &DiffOptions::default(), io::stderr().lock())
}

/// Like [`dump_diff`], but values that compare equal are skipped without being walked.
pub fn dump_diff_eq<T: Introspect + PartialEq + ?Sized>(
    expected: &T,
    received: &T,
) -> io::Result<usize> {
    if expected == received {
        return Ok(0);
    }
    dump_diff(expected, received)
}
