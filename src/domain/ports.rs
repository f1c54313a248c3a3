use super::journal::JournalEntry;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only record of what happened during a session.
#[async_trait]
pub trait SessionJournal: Send + Sync {
    async fn record(&self, entry: JournalEntry) -> Result<()>;
    async fn entries(&self) -> Result<Vec<JournalEntry>>;
}

pub type SessionJournalBox = Box<dyn SessionJournal>;
