//! Writes what people say to an output stream.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::person::Person;

/// Speaks for people on `out` (stdout in the CLI, a buffer in tests).
pub struct Announcer<W: Write> {
    out: W,
}

impl<W: Write> Announcer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn say_hello(&mut self, person: &Person) -> Result<()> {
        writeln!(self.out, "{}", person.greeting()).context("write greeting")
    }

    /// Write the person's job announcement. Returns false for people without a job.
    pub fn announce_job(&mut self, person: &Person) -> Result<bool> {
        let Some(line) = person.announcement() else {
            return Ok(false);
        };
        writeln!(self.out, "{}", line).context("write job announcement")?;
        Ok(true)
    }

    /// Greeting followed by the job announcement, if any.
    pub fn introduce(&mut self, person: &Person) -> Result<()> {
        self.say_hello(person)?;
        self.announce_job(person)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
