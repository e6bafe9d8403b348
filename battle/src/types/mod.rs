//! Domain types for crew battles

mod character;
mod player;
mod record;
mod team;

pub use character::Character;
pub use player::{Player, STOCKS_PER_PLAYER};
pub use record::{MatchRecord, Side};
pub use team::Team;
