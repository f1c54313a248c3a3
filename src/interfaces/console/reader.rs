use crate::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Reads protocol lines from any async buffered source (stdin, a file).
pub struct CommandReader<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> CommandReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
        }
    }

    /// Waits for the next line; `None` once the source is exhausted.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }
}
