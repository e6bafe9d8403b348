//! Player state

use super::character::Character;

/// Stocks every fielded player starts with
pub const STOCKS_PER_PLAYER: u32 = 3;

/// One person fielded by a team for some span of the battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Display name
    pub name: String,

    /// Name of the team that fielded this player
    pub team: String,

    /// Stocks this player has taken from opponents
    pub taken: u32,

    /// Stocks this player has left
    pub left: u32,

    /// Character used in the most recently finished match
    pub character: Option<Character>,
}

impl Player {
    /// Create a fresh player with a full stock count
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            taken: 0,
            left: STOCKS_PER_PLAYER,
            character: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// Set the character used in the match about to be recorded
    pub fn set_character(&mut self, character: Character) {
        self.character = Some(character);
    }

    /// Whether this player has no stocks left
    pub fn is_eliminated(&self) -> bool {
        self.left == 0
    }
}
