//! Character used by a player in a match

use std::fmt;

/// The in-game avatar a player picked for one match
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Character(String);

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Character {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Character {
    fn from(name: String) -> Self {
        Self(name)
    }
}
