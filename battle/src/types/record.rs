//! Match records

use std::fmt;

use super::character::Character;
use super::player::Player;

/// Which side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// One finished 1v1 confrontation
///
/// `p1` and `p2` are snapshots of the two players at match end. Two records
/// compare equal when player names, characters, taken counts and winner all
/// match; stock counts and roster slots are ignored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    pub p1: Player,
    pub p2: Player,

    /// Roster index `p1` occupied in team 1
    pub p1_slot: usize,

    /// Roster index `p2` occupied in team 2
    pub p2_slot: usize,

    /// Stocks player 1 took from player 2
    pub p1_taken: u32,

    /// Stocks player 2 took from player 1
    pub p2_taken: u32,

    pub winner: Side,
}

impl MatchRecord {
    pub fn winning_player(&self) -> &Player {
        match self.winner {
            Side::One => &self.p1,
            Side::Two => &self.p2,
        }
    }

    pub fn losing_player(&self) -> &Player {
        match self.winner {
            Side::One => &self.p2,
            Side::Two => &self.p1,
        }
    }

    fn character_name(player: &Player) -> &str {
        player.character().map_or("", Character::name)
    }
}

impl PartialEq for MatchRecord {
    fn eq(&self, other: &Self) -> bool {
        self.p1.name == other.p1.name
            && self.p2.name == other.p2.name
            && self.p1_taken == other.p1_taken
            && self.p2_taken == other.p2_taken
            && self.winner == other.winner
            && Self::character_name(&self.p1) == Self::character_name(&other.p1)
            && Self::character_name(&self.p2) == Self::character_name(&other.p2)
    }
}

impl Eq for MatchRecord {}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}| {} [{}] vs [{}] {}|{}",
            self.p1.name,
            Self::character_name(&self.p1),
            self.p1_taken,
            self.p2_taken,
            Self::character_name(&self.p2),
            self.p2.name,
        )
    }
}
