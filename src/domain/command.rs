use crate::error::SessionError;
use std::fmt;
use std::str::FromStr;

/// The four kinds of command a session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Lift,
    InsertCoins,
    Dial,
    Abort,
}

impl CommandKind {
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Lift => "LEVANTAR",
            CommandKind::InsertCoins => "MOEDA",
            CommandKind::Dial => "T=",
            CommandKind::Abort => "ABORTAR",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed input line.
///
/// Coin labels and the dialed number are carried raw, possibly empty; the
/// machine validates them so that phase errors take precedence over argument
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lift,
    InsertCoins(Vec<String>),
    Dial(String),
    Abort,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Lift => CommandKind::Lift,
            Command::InsertCoins(_) => CommandKind::InsertCoins,
            Command::Dial(_) => CommandKind::Dial,
            Command::Abort => CommandKind::Abort,
        }
    }
}

/// Parses one line of the text protocol: `LEVANTAR`, `MOEDA 1e, 50c.`,
/// `T= 212345678` or `ABORTAR`.
///
/// The keyword is the first whitespace-separated token. Anything after
/// `LEVANTAR` or `ABORTAR` is ignored.
impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword {
            "LEVANTAR" => Ok(Command::Lift),
            "ABORTAR" => Ok(Command::Abort),
            "MOEDA" => {
                let list = rest.strip_suffix('.').unwrap_or(rest).trim();
                let labels = if list.is_empty() {
                    Vec::new()
                } else {
                    list.split(',').map(|l| l.trim().to_string()).collect()
                };
                Ok(Command::InsertCoins(labels))
            }
            "T=" => {
                let number = rest.split_whitespace().next().unwrap_or_default();
                Ok(Command::Dial(number.to_string()))
            }
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }
}
