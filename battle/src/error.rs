use thiserror::Error;

/// Errors raised by a single team
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("{team} already has {player} active; use replace to swap them out")]
    PlayerActive { team: String, player: String },

    #[error("{team} cannot field {num_players} players; the stock pool would overflow")]
    RosterTooLarge { team: String, num_players: usize },
}

/// Errors raised by the battle state machine
///
/// Every variant carries the label of the offending battle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// The operation does not fit the battle's current state
    #[error("{battle}: {reason}")]
    InvalidState { battle: String, reason: String },

    /// No team with this name takes part in the battle
    #[error("{battle}: no team named {team}")]
    UnknownTeam { battle: String, team: String },

    /// Reported stock counts contradict each other
    #[error("{battle}: result [{taken1}] vs [{taken2}] is inconsistent: {reason}")]
    InvariantViolation {
        battle: String,
        taken1: u32,
        taken2: u32,
        reason: String,
    },
}

impl BattleError {
    /// Label of the battle that raised this error
    pub fn battle(&self) -> &str {
        match self {
            Self::InvalidState { battle, .. }
            | Self::UnknownTeam { battle, .. }
            | Self::InvariantViolation { battle, .. } => battle,
        }
    }

    /// Whether the request was rejected because of the battle's state
    /// (unknown team names included)
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. } | Self::UnknownTeam { .. })
    }

    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, BattleError>;
