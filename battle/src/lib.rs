//! Crew battle scoresheet state machine.
//!
//! Two teams field players one at a time; each finished 1v1 match costs the
//! loser's player all of their remaining stocks and the winner's player
//! whatever the loser took. A team whose stock pool runs out loses the
//! battle.
//!
//! # Overview
//!
//! `crew-battle` is the core of the workspace and does no I/O:
//!
//! ```text
//! crew-protocol (command lines)
//!        │
//!        ▼
//! crew-referee (one serialized task per set of battles)
//!        │
//!        ▼
//! crew-battle (domain types + state machine) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Character`] - Avatar a player used in a match
//! - [`Player`] - One fielded player and their stock count
//! - [`Team`] - Roster, stock pool and active player of one side
//! - [`MatchRecord`] - One finished match
//!
//! ## State Machine
//! - [`Battle`] - Main entry point: field players, finish matches, undo
//! - [`Phase`] - Setup / Ready / Over, derived from the battle's data
//!
//! # Example Usage
//!
//! ```
//! use crew_battle::{Battle, Phase};
//!
//! let mut battle = Battle::new("A", "B", 1)?;
//! battle.add_player("A", "Mango")?;
//! battle.add_player("B", "Armada")?;
//!
//! let outcome = battle.finish_match(3, 1, "Falco", "Peach")?;
//! assert_eq!(outcome.phase, Phase::Over);
//! assert_eq!(battle.winner()?.name, "A");
//! println!("{}", battle.summary());
//! # Ok::<(), crew_battle::BattleError>(())
//! ```

pub mod error;
pub mod tracking;
pub mod types;

pub use error::{BattleError, TeamError};
pub use tracking::{Battle, MatchOutcome, Phase, side_to_index};
pub use types::{Character, MatchRecord, Player, STOCKS_PER_PLAYER, Side, Team};
