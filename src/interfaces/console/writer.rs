use crate::domain::machine::Outcome;
use crate::error::{Result, SessionError};
use std::fmt::Display;
use std::io::Write;

const PROMPT: &str = "user> ";
const REPLY_PREFIX: &str = "machine> ";

/// Writes the machine's side of the conversation, one `machine> ` line per
/// reply.
pub struct ReplyWriter<W: Write> {
    writer: W,
    prompt: bool,
}

impl<W: Write> ReplyWriter<W> {
    /// `prompt` controls whether `user> ` is written before each input line.
    pub fn new(writer: W, prompt: bool) -> Self {
        Self { writer, prompt }
    }

    pub fn prompt(&mut self) -> Result<()> {
        if self.prompt {
            write!(self.writer, "{PROMPT}")?;
            self.writer.flush()?;
        }
        Ok(())
    }

    pub fn write_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::ReceiverLifted => self.write_reply("Insert coins."),
            Outcome::Credited { balance, .. } => {
                self.write_reply(format_args!("Current balance: {balance}"))
            }
            Outcome::CallPlaced {
                number, balance, ..
            } => self.write_reply(format_args!(
                "Call to {number} made successfully. Current balance: {balance}"
            )),
            Outcome::Terminate => Ok(()),
        }
    }

    pub fn write_rejection(&mut self, err: &SessionError) -> Result<()> {
        self.write_reply(err)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_reply(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.writer, "{REPLY_PREFIX}{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}
