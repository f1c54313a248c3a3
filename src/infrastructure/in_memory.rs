use crate::domain::journal::JournalEntry;
use crate::domain::ports::SessionJournal;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory session journal.
///
/// Clones share the same underlying entries, so a test can keep a handle
/// while the service owns another.
#[derive(Default, Clone)]
pub struct InMemoryJournal {
    entries: Arc<RwLock<Vec<JournalEntry>>>,
}

impl InMemoryJournal {
    /// Creates a new, empty journal.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionJournal for InMemoryJournal {
    async fn record(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry);
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<JournalEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_journal_keeps_order() {
        let journal = InMemoryJournal::new();
        journal.record(JournalEntry::ReceiverLifted).await.unwrap();
        journal.record(JournalEntry::Terminated).await.unwrap();

        let entries = journal.entries().await.unwrap();
        assert_eq!(
            entries,
            vec![JournalEntry::ReceiverLifted, JournalEntry::Terminated]
        );
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let journal = InMemoryJournal::new();
        let handle = journal.clone();
        journal.record(JournalEntry::ReceiverLifted).await.unwrap();

        assert_eq!(handle.entries().await.unwrap().len(), 1);
    }
}
