use thiserror::Error;

/// Reasons a command line is rejected before it reaches the registries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),
    #[error("Incorrect command arguments.")]
    IncorrectArguments { usage: &'static str },
    #[error("Invalid owner ID.")]
    InvalidOwnerId,
    #[error("Invalid area value.")]
    InvalidArea,
    #[error("Invalid price value.")]
    InvalidPrice,
    #[error("Invalid property ID.")]
    InvalidPropertyId,
}
