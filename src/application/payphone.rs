use crate::domain::command::Command;
use crate::domain::journal::{JournalEntry, SessionSummary};
use crate::domain::machine::{Machine, Outcome};
use crate::domain::ports::SessionJournalBox;
use crate::error::Result;

/// Runs one payphone session.
///
/// `PayphoneService` owns the machine and the journal. Each input line is
/// parsed, applied and recorded before the next one is accepted, so the
/// journal always reflects the machine's history in order.
pub struct PayphoneService {
    machine: Machine,
    journal: SessionJournalBox,
}

impl PayphoneService {
    /// Creates a new `PayphoneService` instance.
    ///
    /// # Arguments
    ///
    /// * `machine` - The session state, usually fresh and idle.
    /// * `journal` - Where accepted and rejected commands are recorded.
    pub fn new(machine: Machine, journal: SessionJournalBox) -> Self {
        Self { machine, journal }
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Handles one line of input.
    ///
    /// A refused command comes back as `PayphoneError::Session` and leaves the
    /// machine untouched. Any other error comes from the journal and is fatal.
    pub async fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        tracing::debug!(phase = ?self.machine.phase(), line, "dispatching command");

        match line
            .parse::<Command>()
            .and_then(|command| self.machine.apply(command))
        {
            Ok(outcome) => {
                self.trace_outcome(&outcome);
                self.journal.record(JournalEntry::from(&outcome)).await?;
                Ok(outcome)
            }
            Err(err) => {
                tracing::debug!(phase = ?self.machine.phase(), error = ?err, "command rejected");
                self.journal
                    .record(JournalEntry::Rejected {
                        line: line.to_string(),
                        reason: err.to_string(),
                    })
                    .await?;
                Err(err.into())
            }
        }
    }

    pub async fn entries(&self) -> Result<Vec<JournalEntry>> {
        self.journal.entries().await
    }

    pub async fn summary(&self) -> Result<SessionSummary> {
        let entries = self.journal.entries().await?;
        Ok(SessionSummary::from_entries(&entries))
    }

    fn trace_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::ReceiverLifted => tracing::info!("receiver lifted"),
            Outcome::Credited {
                credited, balance, ..
            } => tracing::info!(%credited, %balance, "coins credited"),
            Outcome::CallPlaced {
                number,
                cost,
                balance,
            } => tracing::info!(%number, %cost, %balance, "call authorized"),
            Outcome::Terminate => {
                tracing::info!(phase = ?self.machine.phase(), balance = %self.machine.balance(), "session aborted")
            }
        }
    }
}
