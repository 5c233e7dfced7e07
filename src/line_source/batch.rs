use std::path::{Path, PathBuf};

use glob::Pattern;
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tracing::{info, instrument};

use crate::app_system::{RegistryClient, SystemError};

use super::{read_line_lossy, write_lines};

/// Runs every line of `reader` through the registry, writing the output.
///
/// Returns the number of lines read, blank ones included.
pub async fn run_lines<R, W>(client: &RegistryClient, mut reader: R, out: &mut W) -> Result<usize, SystemError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut count = 0;
    while let Some(line) = read_line_lossy(&mut reader, &mut buf).await? {
        count += 1;
        let output = client.execute(line).await?;
        write_lines(out, &output).await?;
    }
    Ok(count)
}

/// Files in `dir` whose names match `pattern`, sorted by name ignoring case.
pub async fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, SystemError> {
    let pattern = Pattern::new(pattern).map_err(|source| SystemError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let io_error = |source| SystemError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(io_error)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !pattern.matches(&name) {
            continue;
        }
        if entry.file_type().await.map_err(io_error)?.is_file() {
            files.push((name.to_lowercase(), entry.path()));
        }
    }

    files.sort();
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// Runs the batch files found in `dir`, announcing each one.
#[instrument(skip(client, out))]
pub async fn run_batch_files<W>(
    client: &RegistryClient,
    dir: &Path,
    pattern: &str,
    out: &mut W,
) -> Result<usize, SystemError>
where
    W: AsyncWrite + Unpin,
{
    let files = discover_files(dir, pattern).await?;
    if files.is_empty() {
        write_lines(out, &["No propertiesXX.txt files found.".to_string()]).await?;
        return Ok(0);
    }

    for path in &files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        write_lines(out, &[format!("Reading input file: {}", name), String::new()]).await?;

        let file = fs::File::open(path).await.map_err(|source| SystemError::Io {
            path: path.clone(),
            source,
        })?;
        let count = run_lines(client, BufReader::new(file), out).await?;
        info!(file = %name, lines = count, "Batch file processed");

        write_lines(out, &[String::new()]).await?;
    }
    Ok(files.len())
}
