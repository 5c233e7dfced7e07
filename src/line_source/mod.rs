//! Feeding command lines to the registry: batch files first, then the
//! interactive console.

mod batch;
mod interactive;

pub use batch::*;
pub use interactive::*;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::instrument;

use crate::app_system::{Config, RegistryClient, SystemError};

/// Writes each line followed by a newline, then flushes.
pub async fn write_lines<W>(out: &mut W, lines: &[String]) -> Result<(), SystemError>
where
    W: AsyncWrite + Unpin,
{
    for line in lines {
        out.write_all(line.as_bytes()).await.map_err(SystemError::Output)?;
        out.write_all(b"\n").await.map_err(SystemError::Output)?;
    }
    out.flush().await.map_err(SystemError::Output)
}

/// Reads the next line without its `\n` or `\r\n` terminator. `None` at end
/// of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so one badly encoded line
/// cannot end the session.
pub async fn read_line_lossy<R>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>, SystemError>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await.map_err(SystemError::Input)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Runs every discovered batch file and, unless disabled, the interactive
/// console on stdin.
#[instrument(skip_all)]
pub async fn run_session<W>(client: &RegistryClient, config: &Config, out: &mut W) -> Result<(), SystemError>
where
    W: AsyncWrite + Unpin,
{
    run_batch_files(client, &config.input_dir, &config.pattern, out).await?;

    if !config.no_interactive {
        let stdin = BufReader::new(tokio::io::stdin());
        run_interactive(client, stdin, out).await?;
    }
    Ok(())
}
