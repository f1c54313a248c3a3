use super::reader::CommandReader;
use super::writer::ReplyWriter;
use crate::application::payphone::PayphoneService;
use crate::domain::machine::Outcome;
use crate::error::{PayphoneError, Result};
use std::io::Write;
use tokio::io::AsyncBufRead;

/// How a session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Aborted,
    EndOfInput,
}

/// Feeds lines to the service until `ABORTAR` or end of input.
///
/// Refused commands are answered and the loop continues; only I/O and journal
/// failures stop it with an error.
pub async fn run_session<R, W>(
    service: &mut PayphoneService,
    reader: &mut CommandReader<R>,
    writer: &mut ReplyWriter<W>,
) -> Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        writer.prompt()?;
        let Some(line) = reader.next_line().await? else {
            tracing::debug!("input closed");
            return Ok(SessionEnd::EndOfInput);
        };

        match service.handle_line(&line).await {
            Ok(Outcome::Terminate) => return Ok(SessionEnd::Aborted),
            Ok(outcome) => writer.write_outcome(&outcome)?,
            Err(PayphoneError::Session(err)) => writer.write_rejection(&err)?,
            Err(err) => return Err(err),
        }
    }
}
