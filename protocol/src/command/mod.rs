mod args;
mod parse;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Prefix that marks a line as a scoresheet command
pub const COMMAND_PREFIX: char = '!';

/// Scoresheet commands a referee understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// !battle TEAM1 TEAM2 [SIZE]
    NewBattle {
        team1: String,
        team2: String,
        size: Option<usize>,
    },

    /// !add TEAM PLAYER
    AddPlayer { team: String, player: String },

    /// !replace TEAM PLAYER
    ReplacePlayer { team: String, player: String },

    /// !end TAKEN1 TAKEN2 CHAR1 CHAR2
    FinishMatch {
        taken1: u32,
        taken2: u32,
        char1: String,
        char2: String,
    },

    /// !undo
    Undo,

    /// !resize SIZE
    Resize(usize),

    /// !status
    Status,

    /// Anything that is not a known command
    Raw(String),
}

impl Command {
    /// Render the command as a line `parse_command` reads back unchanged
    pub fn to_command_string(&self) -> String {
        let parts: Vec<String> = match self {
            Self::NewBattle { team1, team2, size } => {
                let mut parts = vec!["battle".to_string(), args::quote(team1), args::quote(team2)];
                parts.extend(size.map(|size| size.to_string()));
                parts
            }
            Self::AddPlayer { team, player } => {
                vec!["add".to_string(), args::quote(team), args::quote(player)]
            }
            Self::ReplacePlayer { team, player } => {
                vec!["replace".to_string(), args::quote(team), args::quote(player)]
            }
            Self::FinishMatch {
                taken1,
                taken2,
                char1,
                char2,
            } => vec![
                "end".to_string(),
                taken1.to_string(),
                taken2.to_string(),
                args::quote(char1),
                args::quote(char2),
            ],
            Self::Undo => vec!["undo".to_string()],
            Self::Resize(size) => vec!["resize".to_string(), size.to_string()],
            Self::Status => vec!["status".to_string()],
            Self::Raw(line) => return line.clone(),
        };
        format!("{}{}", COMMAND_PREFIX, parts.join(" "))
    }

    /// Whether this command changes battle state
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Status | Self::Raw(_))
    }
}

/// A block of command lines, optionally addressed to one battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandFrame {
    pub battle_id: Option<String>,
    pub commands: Vec<Command>,
}

/// Parse a multi-line block into commands
///
/// A first line of the form `>BATTLEID` addresses the block to that battle.
pub fn parse_command_frame(frame: &str) -> Result<CommandFrame> {
    let mut lines = frame.lines();
    let mut battle_id = None;

    if let Some(first_line) = lines.clone().next()
        && let Some(id) = first_line.trim().strip_prefix('>')
    {
        battle_id = Some(id.trim().to_string());
        lines.next();
    }

    let commands = lines
        .filter(|line| !line.trim().is_empty())
        .map(parse_command)
        .collect::<Result<Vec<_>>>()?;

    Ok(CommandFrame {
        battle_id,
        commands,
    })
}

/// Parse a single line into a Command
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();

    let Some(body) = line.strip_prefix(COMMAND_PREFIX) else {
        return Ok(Command::Raw(line.to_string()));
    };

    let parts = args::split(body)?;
    let Some(keyword) = parts.first() else {
        return Err(ParseError::EmptyMessage.into());
    };

    match keyword.to_ascii_lowercase().as_str() {
        "battle" => parse::parse_battle(&parts),
        "add" => parse::parse_add(&parts),
        "replace" => parse::parse_replace(&parts),
        "end" => parse::parse_end(&parts),
        "undo" => parse::parse_bare(&parts, Command::Undo),
        "resize" => parse::parse_resize(&parts),
        "status" => parse::parse_bare(&parts, Command::Status),
        _ => Ok(Command::Raw(line.to_string())),
    }
}
