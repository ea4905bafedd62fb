//! Multiret
//!
//! A small demonstration of the two ways to hand multiple values back from a
//! function: a positional tuple, whose fields mean something only by
//! convention, and a named struct whose fields can be reassigned and
//! decomposed with an explicit discard.
//!
//! The library holds the record type and the demo sequence; the `multiret`
//! binary wires the sequence to stdout.

mod demo;
mod person;

pub use demo::run;
pub use person::{Person, PersonDetails};
