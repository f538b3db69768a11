#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use shapediff_core::*;

pub use shapediff_macros::*;
