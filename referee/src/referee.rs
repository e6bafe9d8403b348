use std::collections::HashMap;
use std::fmt;

use crew_battle::{Battle, MatchOutcome, MatchRecord};
use crew_protocol::Command;

use crate::config::RefereeConfig;
use crate::error::RefereeError;

/// What an applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Created { label: String },
    PlayerFielded { team: String, player: String },
    MatchFinished(MatchOutcome),
    Undone(MatchRecord),
    Resized(usize),
    Summary(String),
    Ignored,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { label } => write!(f, "Started {}", label),
            Self::PlayerFielded { team, player } => write!(f, "{} is up for {}", player, team),
            Self::MatchFinished(outcome) if outcome.ended_battle() => {
                write!(f, "{} (battle over)", outcome.record)
            }
            Self::MatchFinished(outcome) => write!(f, "{}", outcome.record),
            Self::Undone(record) => write!(f, "Undid {}", record),
            Self::Resized(size) => write!(f, "Teams resized to {}", size),
            Self::Summary(summary) => f.write_str(summary),
            Self::Ignored => Ok(()),
        }
    }
}

/// Battles keyed by battle id, driven one command at a time
pub struct Referee {
    config: RefereeConfig,
    battles: HashMap<String, Battle>,
}

impl Referee {
    pub fn new(config: RefereeConfig) -> Self {
        Self {
            config,
            battles: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RefereeConfig {
        &self.config
    }

    /// Get a battle by id
    pub fn battle(&self, battle_id: &str) -> Option<&Battle> {
        self.battles.get(battle_id)
    }

    /// Drop a battle, returning it
    pub fn remove(&mut self, battle_id: &str) -> Option<Battle> {
        self.battles.remove(battle_id)
    }

    /// Ids of all running or finished battles
    pub fn battle_ids(&self) -> Vec<String> {
        self.battles.keys().cloned().collect()
    }

    fn battle_mut(&mut self, battle_id: &str) -> Result<&mut Battle, RefereeError> {
        self.battles
            .get_mut(battle_id)
            .ok_or_else(|| RefereeError::NoBattle(battle_id.to_string()))
    }

    fn create(
        &mut self,
        battle_id: &str,
        team1: String,
        team2: String,
        size: Option<usize>,
    ) -> Result<Reply, RefereeError> {
        if let Some(existing) = self.battles.get(battle_id)
            && !existing.battle_over()
        {
            return Err(RefereeError::BattleExists(battle_id.to_string()));
        }

        let battle = Battle::new(team1, team2, size.unwrap_or(self.config.default_size))?;
        let label = battle.label();
        self.battles.insert(battle_id.to_string(), battle);
        Ok(Reply::Created { label })
    }

    /// Apply one command to the battle with this id
    pub fn apply(&mut self, battle_id: &str, command: Command) -> Result<Reply, RefereeError> {
        tracing::debug!(
            battle_id,
            command = %command.to_command_string(),
            "Applying command"
        );

        match command {
            Command::NewBattle { team1, team2, size } => self.create(battle_id, team1, team2, size),
            Command::AddPlayer { team, player } => {
                self.battle_mut(battle_id)?.add_player(&team, &player)?;
                Ok(Reply::PlayerFielded { team, player })
            }
            Command::ReplacePlayer { team, player } => {
                self.battle_mut(battle_id)?.replace_player(&team, &player)?;
                Ok(Reply::PlayerFielded { team, player })
            }
            Command::FinishMatch {
                taken1,
                taken2,
                char1,
                char2,
            } => {
                let outcome = self
                    .battle_mut(battle_id)?
                    .finish_match(taken1, taken2, char1, char2)?;
                Ok(Reply::MatchFinished(outcome))
            }
            Command::Undo => Ok(Reply::Undone(self.battle_mut(battle_id)?.undo()?)),
            Command::Resize(size) => {
                self.battle_mut(battle_id)?.resize(size)?;
                Ok(Reply::Resized(size))
            }
            Command::Status => Ok(Reply::Summary(self.battle_mut(battle_id)?.summary())),
            Command::Raw(_) => Ok(Reply::Ignored),
        }
    }
}
