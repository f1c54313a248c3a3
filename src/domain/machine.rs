use crate::domain::coin::Coin;
use crate::domain::command::{Command, CommandKind};
use crate::domain::money::Cents;
use crate::domain::tariff::{DialedNumber, Tariff};
use crate::error::SessionError;

/// Where a payphone session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    ReceiverLifted,
    CoinsInserted,
    InCall,
}

impl Phase {
    /// Whether a command of `kind` may run in this phase. This is the only
    /// place the transition table lives.
    pub fn accepts(self, kind: CommandKind) -> bool {
        matches!(
            (self, kind),
            (_, CommandKind::Abort)
                | (Phase::Idle, CommandKind::Lift)
                | (
                    Phase::ReceiverLifted | Phase::CoinsInserted,
                    CommandKind::InsertCoins
                )
                | (Phase::CoinsInserted, CommandKind::Dial)
        )
    }
}

/// What an accepted command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ReceiverLifted,
    Credited {
        coins: Vec<Coin>,
        credited: Cents,
        balance: Cents,
    },
    CallPlaced {
        number: DialedNumber,
        cost: Cents,
        balance: Cents,
    },
    /// The session is over. Nothing after this is processed.
    Terminate,
}

/// State of a single payphone session.
///
/// The balance only grows through coin insertion and only shrinks through an
/// authorized call. A rejected command leaves both phase and balance exactly
/// as they were.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    phase: Phase,
    balance: Cents,
    tariff: Tariff,
}

impl Machine {
    pub fn new(tariff: Tariff) -> Self {
        Self {
            phase: Phase::Idle,
            balance: Cents::ZERO,
            tariff,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let kind = command.kind();
        if !self.phase.accepts(kind) {
            return Err(self.refusal(kind));
        }

        match command {
            Command::Lift => Ok(self.lift()),
            Command::InsertCoins(labels) => self.insert_coins(&labels),
            Command::Dial(number) => self.dial(&number),
            Command::Abort => Ok(Outcome::Terminate),
        }
    }

    fn lift(&mut self) -> Outcome {
        self.phase = Phase::ReceiverLifted;
        self.balance = Cents::ZERO;
        Outcome::ReceiverLifted
    }

    fn insert_coins(&mut self, labels: &[String]) -> Result<Outcome, SessionError> {
        if labels.is_empty() {
            return Err(SessionError::MissingArgument(CommandKind::InsertCoins));
        }

        let coins = Coin::parse_batch(labels)?;
        let credited: Cents = coins.iter().map(|coin| coin.value()).sum();

        self.balance += credited;
        self.phase = Phase::CoinsInserted;
        Ok(Outcome::Credited {
            coins,
            credited,
            balance: self.balance,
        })
    }

    fn dial(&mut self, raw: &str) -> Result<Outcome, SessionError> {
        if raw.is_empty() {
            return Err(SessionError::MissingArgument(CommandKind::Dial));
        }

        let (number, cost) = self.tariff.quote(raw)?;
        let balance = self
            .balance
            .checked_sub(cost)
            .ok_or(SessionError::InsufficientBalance {
                cost,
                balance: self.balance,
            })?;

        self.balance = balance;
        self.phase = Phase::InCall;
        Ok(Outcome::CallPlaced {
            number,
            cost,
            balance,
        })
    }

    /// The error for a command the current phase does not accept.
    fn refusal(&self, command: CommandKind) -> SessionError {
        match (self.phase, command) {
            (_, CommandKind::Lift) => SessionError::ReceiverAlreadyLifted,
            (Phase::Idle, _) => SessionError::SessionNotStarted,
            _ => self.invalid_state(command),
        }
    }

    fn invalid_state(&self, command: CommandKind) -> SessionError {
        SessionError::InvalidStateForCommand {
            command,
            phase: self.phase,
        }
    }
}
