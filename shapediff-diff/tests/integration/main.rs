//! Integration tests for shapediff-diff.

mod collections;
mod maps;
mod optionals;
mod options;
mod records;
mod snapshots;
mod unions;
