use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

use crate::app_system::{RegistryClient, SystemError};
use crate::interpreter::HELP;

use super::{read_line_lossy, write_lines};

pub const PROMPT: &str = "> ";

/// Interactive console. Reads commands until end of input or `exit`
/// (any case, surrounding blanks ignored).
///
/// Returns the number of commands sent to the registry.
#[instrument(skip_all)]
pub async fn run_interactive<R, W>(client: &RegistryClient, mut reader: R, out: &mut W) -> Result<usize, SystemError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut banner = vec![
        String::new(),
        "Starting in interactive console mode.".to_string(),
        "Enter commands (type 'exit' to quit):".to_string(),
    ];
    banner.extend(HELP.iter().map(|line| line.to_string()));
    write_lines(out, &banner).await?;

    let mut buf = Vec::new();
    let mut executed = 0;
    loop {
        out.write_all(PROMPT.as_bytes()).await.map_err(SystemError::Output)?;
        out.flush().await.map_err(SystemError::Output)?;

        let Some(line) = read_line_lossy(&mut reader, &mut buf).await? else {
            debug!("End of input");
            break;
        };
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let output = client.execute(line).await?;
        write_lines(out, &output).await?;
        executed += 1;
    }
    Ok(executed)
}
