use async_trait::async_trait;
use crew_battle::{Battle, MatchRecord};
use crew_protocol::Command;

use crate::error::RefereeError;

/// Trait for reacting to battle events.
///
/// All methods have default no-op implementations, so you only need to
/// implement the events you care about. Events for one referee arrive in the
/// order the commands were applied.
///
/// # Example
///
/// ```ignore
/// struct Announcer;
///
/// #[async_trait]
/// impl Handler for Announcer {
///     async fn on_battle_finished(&mut self, battle_id: &str, battle: &Battle) {
///         println!("{}: {}", battle_id, battle.summary());
///     }
/// }
/// ```
#[async_trait]
pub trait Handler: Send {
    /// Called after `!battle` starts a battle.
    async fn on_battle_created(&mut self, battle_id: &str, battle: &Battle) {
        let _ = (battle_id, battle);
    }

    /// Called after every recorded match, including the one that ends the battle.
    async fn on_match_finished(&mut self, battle_id: &str, record: &MatchRecord) {
        let _ = (battle_id, record);
    }

    /// Called once a match leaves a team without stocks.
    async fn on_battle_finished(&mut self, battle_id: &str, battle: &Battle) {
        let _ = (battle_id, battle);
    }

    /// Called after a match has been undone.
    async fn on_undo(&mut self, battle_id: &str, record: &MatchRecord) {
        let _ = (battle_id, record);
    }

    /// Called when a command is rejected. The battle is unchanged.
    async fn on_rejected(&mut self, battle_id: &str, command: &Command, error: &RefereeError) {
        let _ = (battle_id, command, error);
    }
}

#[async_trait]
impl Handler for () {}
