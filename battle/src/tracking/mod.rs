//! Crew battle state machine

mod battle;
mod summary;

pub use battle::{Battle, MatchOutcome, Phase, side_to_index};
