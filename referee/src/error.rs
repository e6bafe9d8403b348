use crew_battle::BattleError;
use crew_protocol::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefereeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("No battle running in {0}; start one with !battle")]
    NoBattle(String),

    #[error("A battle is already running in {0}")]
    BattleExists(String),
}

/// Lift a parse failure out of an `anyhow::Error`
pub(crate) fn from_parse_failure(error: anyhow::Error) -> anyhow::Error {
    match error.downcast::<ParseError>() {
        Ok(parse_error) => RefereeError::Parse(parse_error).into(),
        Err(other) => other,
    }
}
