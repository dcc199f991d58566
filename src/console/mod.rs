//! Line-oriented console front end.
//!
//! [`run`] drives a [`Session`] from any buffered reader and writer, so the
//! binary wires it to stdin/stdout and tests wire it to byte buffers.

mod session;

pub use session::Session;

use crate::error::{BookError, BookResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

/// Prompt written before each line is read.
pub const PROMPT: &str = "You: ";

/// Read commands from `input` until the exit command or end of input,
/// writing each reply to `output`.
///
/// End of input stops the loop without saving.
pub async fn run<R, W>(session: &mut Session, input: R, mut output: W) -> BookResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output
            .write_all(PROMPT.as_bytes())
            .await
            .map_err(BookError::Console)?;
        output.flush().await.map_err(BookError::Console)?;

        let Some(line) = lines.next_line().await.map_err(BookError::Console)? else {
            warn!("Input closed before exit command; changes were not saved");
            return Ok(());
        };

        let outcome = session.execute(&line).await?;
        if !outcome.text().is_empty() {
            output
                .write_all(format!("{}\n", outcome.text()).as_bytes())
                .await
                .map_err(BookError::Console)?;
        }

        if outcome.is_exit() {
            output.flush().await.map_err(BookError::Console)?;
            return Ok(());
        }
    }
}
