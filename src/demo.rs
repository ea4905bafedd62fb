//! The demo sequence: one record, both accessor shapes, a field mutation on
//! the local binding, and a decomposition that discards the middle field.

use crate::person::{Person, PersonDetails};
use anyhow::Result;
use std::io::Write;
use tracing::info;

/// Run the full sequence, writing the eight-line transcript to `out`.
///
/// Generic over the sink so the exact output is testable without a process
/// boundary; the binary passes stdout.
pub fn run(out: &mut impl Write) -> Result<()> {
    let mut person = Person::new();

    info!("reading name and age as a positional pair");
    let pair = person.name_age_pair();
    writeln!(out, "{}", pair.0)?;
    writeln!(out, "{}", pair.1)?;

    info!("reading details as a named struct");
    let mut details = person.details();
    writeln!(out, "{}", details.id)?;
    writeln!(out, "{}", details.name)?;
    writeln!(out, "{}", details.age)?;

    // Local to the binding; person.id stays 1.
    details.id = 10;
    writeln!(out, "{details}")?;

    info!("decomposing the struct, discarding the name");
    let PersonDetails { id, name: _, age } = details;
    writeln!(out, "{id}")?;
    writeln!(out, "{age}")?;

    Ok(())
}
