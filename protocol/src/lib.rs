use thiserror::Error;

pub mod command;

pub use command::{Command, CommandFrame, parse_command, parse_command_frame};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty command")]
    EmptyMessage,
}
