use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the program around the registry. The registry itself never
/// fails outward; these come from I/O and from the registry task going away.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Registry communication error: {0}")]
    ActorCommunicationError(String),
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid input file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}
