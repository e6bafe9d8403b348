//! Team (one side of a crew battle)

use super::player::{Player, STOCKS_PER_PLAYER};
use crate::error::TeamError;

/// One side of a crew battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Team name, unique within a battle
    pub name: String,

    /// Configured roster size
    pub num_players: usize,

    /// Remaining stock pool for the whole team
    pub stocks: u32,

    /// Every player fielded so far (fielding order)
    pub players: Vec<Player>,

    /// Index into `players` of the active player
    pub(crate) current: Option<usize>,
}

impl Team {
    /// Create a team with a full stock pool and nobody fielded
    ///
    /// Fails when the pool for `num_players` does not fit in a `u32`.
    pub fn new(name: impl Into<String>, num_players: usize) -> Result<Self, TeamError> {
        let name = name.into();
        let Some(stocks) = u32::try_from(num_players)
            .ok()
            .and_then(|n| n.checked_mul(STOCKS_PER_PLAYER))
        else {
            return Err(TeamError::RosterTooLarge {
                team: name,
                num_players,
            });
        };

        Ok(Self {
            name,
            num_players,
            stocks,
            players: Vec::new(),
            current: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the active player
    pub fn current_player(&self) -> Option<&Player> {
        self.current.and_then(|idx| self.players.get(idx))
    }

    /// Get the active player mutably
    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.current.and_then(|idx| self.players.get_mut(idx))
    }

    /// Roster index of the active player
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn has_current_player(&self) -> bool {
        self.current_player().is_some()
    }

    /// Every player fielded so far
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of roster entries
    pub fn roster_len(&self) -> usize {
        self.players.len()
    }

    /// Whether the stock pool is exhausted
    pub fn is_out(&self) -> bool {
        self.stocks == 0
    }

    /// Field a brand-new player
    ///
    /// Fails if a player is already active; that player has to be
    /// eliminated or replaced first.
    pub fn add_player(&mut self, player_name: impl Into<String>) -> Result<(), TeamError> {
        if let Some(active) = self.current_player() {
            return Err(TeamError::PlayerActive {
                team: self.name.clone(),
                player: active.name.clone(),
            });
        }
        self.field(player_name.into());
        Ok(())
    }

    /// Swap out the active player (eliminated or not) for a new one
    ///
    /// The outgoing player is dropped from the roster. With nobody active
    /// this behaves like `add_player`.
    pub fn replace_current_player(&mut self, player_name: impl Into<String>) {
        if let Some(idx) = self.current.take() {
            self.players.remove(idx);
        }
        self.field(player_name.into());
    }

    fn field(&mut self, player_name: String) {
        self.players.push(Player::new(player_name, self.name.clone()));
        self.current = Some(self.players.len() - 1);
    }

    /// Apply one match outcome to the active player and the stock pool
    ///
    /// An active player whose stocks run out stops being current.
    pub fn record_match_result(&mut self, stocks_lost: u32, stocks_taken: u32) {
        self.stocks = self.stocks.saturating_sub(stocks_lost);

        let Some(player) = self.current_player_mut() else {
            return;
        };
        player.left = player.left.saturating_sub(stocks_lost);
        player.taken += stocks_taken;

        if player.is_eliminated() {
            self.current = None;
        }
    }

    /// Roster index that `reverse_match_result` would apply to
    pub fn reversal_index(&self) -> Option<usize> {
        self.current.or_else(|| self.players.len().checked_sub(1))
    }

    /// Make `player` the active entry at roster index `slot` again
    ///
    /// Entries from `slot` on are dropped first. Callers pass the snapshot
    /// taken when that player's last match was recorded, so anyone fielded
    /// since then is un-fielded and a substituted player comes back.
    pub fn rewind_to(&mut self, slot: usize, player: Player) {
        self.players.truncate(slot);
        self.players.push(player);
        self.current = Some(slot);
    }

    /// Exact inverse of `record_match_result`
    ///
    /// With nobody active, the most recently fielded player is restored as
    /// current first.
    pub fn reverse_match_result(&mut self, stocks_lost: u32, stocks_taken: u32) {
        self.current = self.reversal_index();

        let Some(player) = self.current_player_mut() else {
            return;
        };
        player.left += stocks_lost;
        player.taken = player.taken.saturating_sub(stocks_taken);
        self.stocks += stocks_lost;
    }
}
