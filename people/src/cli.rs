//! CLI command implementations.
//!
//! Each command writes its product output to `out`; diagnostics go through
//! `tracing` to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::arith::{Number, Operation};
use crate::core::census::Census;
use crate::io::announce::Announcer;
use crate::io::config::RosterSource;
use crate::roster::{compare_people, load_people};

/// Print every person in the roster, then the population.
pub fn show(source: &RosterSource, json: bool, out: &mut impl Write) -> Result<()> {
    let census = Census::new();
    let people = load_people(source, &census)?;
    if json {
        let mut payload = serde_json::to_string_pretty(&people).context("serialize people")?;
        payload.push('\n');
        out.write_all(payload.as_bytes()).context("write json")?;
        return Ok(());
    }
    for person in &people {
        writeln!(out, "{}", person).context("write person")?;
    }
    writeln!(out, "population: {}", census.population()).context("write population")?;
    Ok(())
}

/// Greet with every person, each followed by their job announcement.
pub fn greet(source: &RosterSource, out: &mut impl Write) -> Result<()> {
    let census = Census::new();
    let people = load_people(source, &census)?;
    info!(people = people.len(), "greeting roster");
    let mut announcer = Announcer::new(out);
    for person in &people {
        announcer.introduce(person)?;
    }
    Ok(())
}

/// Compare two people from the roster by age.
pub fn compare(source: &RosterSource, left: &str, right: &str, out: &mut impl Write) -> Result<()> {
    let census = Census::new();
    let people = load_people(source, &census)?;
    let comparison = compare_people(&people, left, right)?;
    writeln!(out, "{}", comparison).context("write comparison")?;
    Ok(())
}

/// Evaluate one arithmetic helper.
///
/// `ArithError` is returned unwrapped so the caller can map it to an exit code.
pub fn calc(op: Operation, x: Number, y: Option<Number>, out: &mut impl Write) -> Result<()> {
    debug!(%op, %x, ?y, "calc");
    let value = op.apply(x, y)?;
    writeln!(out, "{}", value).context("write result")?;
    Ok(())
}
