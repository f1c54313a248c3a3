use crate::domain::coin::Coin;
use crate::domain::machine::Outcome;
use crate::domain::money::Cents;
use crate::domain::tariff::DialedNumber;
use serde::Serialize;

/// One line of the session's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JournalEntry {
    ReceiverLifted,
    CoinsInserted {
        coins: Vec<Coin>,
        credited: Cents,
        balance: Cents,
    },
    CallPlaced {
        number: DialedNumber,
        cost: Cents,
        balance: Cents,
    },
    Rejected {
        line: String,
        reason: String,
    },
    Terminated,
}

impl From<&Outcome> for JournalEntry {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::ReceiverLifted => JournalEntry::ReceiverLifted,
            Outcome::Credited {
                coins,
                credited,
                balance,
            } => JournalEntry::CoinsInserted {
                coins: coins.clone(),
                credited: *credited,
                balance: *balance,
            },
            Outcome::CallPlaced {
                number,
                cost,
                balance,
            } => JournalEntry::CallPlaced {
                number: number.clone(),
                cost: *cost,
                balance: *balance,
            },
            Outcome::Terminate => JournalEntry::Terminated,
        }
    }
}

/// Totals derived from a journal.
///
/// For a well-formed journal `balance == inserted - debited`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SessionSummary {
    pub inserted: Cents,
    pub debited: Cents,
    pub balance: Cents,
    pub calls: usize,
    pub rejections: usize,
}

impl SessionSummary {
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut summary, entry| {
                match entry {
                    JournalEntry::CoinsInserted {
                        credited, balance, ..
                    } => {
                        summary.inserted += *credited;
                        summary.balance = *balance;
                    }
                    JournalEntry::CallPlaced { cost, balance, .. } => {
                        summary.debited += *cost;
                        summary.balance = *balance;
                        summary.calls += 1;
                    }
                    JournalEntry::Rejected { .. } => summary.rejections += 1,
                    JournalEntry::ReceiverLifted | JournalEntry::Terminated => {}
                }
                summary
            })
    }
}
