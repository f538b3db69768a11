#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub use unsynn::*;

mod generics;
pub use generics::*;

/// The grammar of the items the derive accepts
pub mod grammar;

mod derive;
pub use derive::*;
