use crate::domain::command::CommandKind;
use crate::domain::machine::Phase;
use crate::domain::money::Cents;
use thiserror::Error;

/// Why a dialed number was refused before any balance check.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumberRejection {
    #[error("This number is not allowed on this phone. Please dial a new number!")]
    Blocked,
    #[error("Invalid number. Please dial a new number!")]
    Malformed,
    #[error("This number is not supported. Please dial a new number!")]
    Unsupported,
}

/// A command the session refused.
///
/// Every variant is recoverable: the machine is left exactly as it was before
/// the command and the session keeps reading input.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SessionError {
    #[error("You need to pick up the phone.")]
    SessionNotStarted,
    #[error("The receiver is already lifted.")]
    ReceiverAlreadyLifted,
    #[error("Invalid command!")]
    InvalidStateForCommand { command: CommandKind, phase: Phase },
    #[error("Invalid coin: {0}")]
    InvalidCoin(String),
    #[error("{0}")]
    InvalidNumber(NumberRejection),
    #[error("You don't have enough balance to make this call. Please insert more coins!")]
    InsufficientBalance { cost: Cents, balance: Cents },
    #[error("Missing argument for {0}.")]
    MissingArgument(CommandKind),
    #[error("Invalid command!")]
    UnknownCommand(String),
}

impl From<NumberRejection> for SessionError {
    fn from(reason: NumberRejection) -> Self {
        SessionError::InvalidNumber(reason)
    }
}

#[derive(Error, Debug)]
pub enum PayphoneError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Tariff configuration error: {0}")]
    ConfigError(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

pub type Result<T> = std::result::Result<T, PayphoneError>;
