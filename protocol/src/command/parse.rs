use std::str::FromStr;

use anyhow::Result;

use super::Command;
use crate::ParseError;

fn field<'a>(parts: &'a [String], idx: usize, name: &str) -> Result<&'a str> {
    match parts.get(idx) {
        Some(part) if !part.is_empty() => Ok(part.as_str()),
        _ => Err(ParseError::MissingField(format!("{} {}", parts[0], name)).into()),
    }
}

fn number<T: FromStr>(parts: &[String], idx: usize, name: &str) -> Result<T> {
    let raw = field(parts, idx, name)?;
    raw.parse().map_err(|_| {
        ParseError::InvalidFormat(format!("{} must be a non-negative number, got '{}'", name, raw))
            .into()
    })
}

fn at_most(parts: &[String], count: usize) -> Result<()> {
    if parts.len() > count {
        return Err(ParseError::InvalidFormat(format!(
            "{} takes {} argument(s), got {}; quote names that contain spaces",
            parts[0],
            count - 1,
            parts.len() - 1
        ))
        .into());
    }
    Ok(())
}

pub fn parse_battle(parts: &[String]) -> Result<Command> {
    // !battle TEAM1 TEAM2 [SIZE]
    at_most(parts, 4)?;
    let size = if parts.len() > 3 {
        Some(number(parts, 3, "size")?)
    } else {
        None
    };

    Ok(Command::NewBattle {
        team1: field(parts, 1, "team1")?.to_string(),
        team2: field(parts, 2, "team2")?.to_string(),
        size,
    })
}

pub fn parse_add(parts: &[String]) -> Result<Command> {
    // !add TEAM PLAYER
    at_most(parts, 3)?;
    Ok(Command::AddPlayer {
        team: field(parts, 1, "team")?.to_string(),
        player: field(parts, 2, "player")?.to_string(),
    })
}

pub fn parse_replace(parts: &[String]) -> Result<Command> {
    // !replace TEAM PLAYER
    at_most(parts, 3)?;
    Ok(Command::ReplacePlayer {
        team: field(parts, 1, "team")?.to_string(),
        player: field(parts, 2, "player")?.to_string(),
    })
}

pub fn parse_end(parts: &[String]) -> Result<Command> {
    // !end TAKEN1 TAKEN2 CHAR1 CHAR2
    at_most(parts, 5)?;
    Ok(Command::FinishMatch {
        taken1: number(parts, 1, "taken1")?,
        taken2: number(parts, 2, "taken2")?,
        char1: field(parts, 3, "char1")?.to_string(),
        char2: field(parts, 4, "char2")?.to_string(),
    })
}

pub fn parse_resize(parts: &[String]) -> Result<Command> {
    // !resize SIZE
    at_most(parts, 2)?;
    Ok(Command::Resize(number(parts, 1, "size")?))
}

/// Commands without arguments
pub fn parse_bare(parts: &[String], command: Command) -> Result<Command> {
    at_most(parts, 1)?;
    Ok(command)
}
