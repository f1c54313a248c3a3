use crate::domain::journal::{JournalEntry, SessionSummary};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JournalReport<'a> {
    summary: SessionSummary,
    entries: &'a [JournalEntry],
}

/// Writes a session journal and its summary as pretty-printed JSON.
pub struct JournalWriter<W: Write> {
    writer: W,
}

impl<W: Write> JournalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_journal(&mut self, entries: &[JournalEntry]) -> Result<()> {
        let report = JournalReport {
            summary: SessionSummary::from_entries(entries),
            entries,
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
