//! Battle - the crew battle state machine

use crate::error::{BattleError, Result};
use crate::types::{Character, MatchRecord, Side, Team};

/// Where a battle stands, derived from its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// At least one team has nobody fielded
    Setup,
    /// Both teams have an active player
    Ready,
    /// Some team's stock pool is empty
    Over,
}

/// Result of `Battle::finish_match`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOutcome {
    /// The record appended to the battle's history
    pub record: MatchRecord,

    /// Phase of the battle right after the match
    pub phase: Phase,
}

impl MatchOutcome {
    /// Whether this match ended the battle
    pub fn ended_battle(&self) -> bool {
        self.phase == Phase::Over
    }
}

/// Two teams trading 1v1 matches until one runs out of stocks
///
/// The battle validates every request before touching any state, so a
/// failed call leaves it exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    /// Team 1 and team 2
    pub(crate) teams: [Team; 2],

    /// Finished matches, oldest first
    pub(crate) matches: Vec<MatchRecord>,
}

impl Battle {
    /// Create a battle between two teams of `num_players` each
    pub fn new(
        team1: impl Into<String>,
        team2: impl Into<String>,
        num_players: usize,
    ) -> Result<Self> {
        let (team1, team2) = (team1.into(), team2.into());
        let label = format!("{} vs {}", team1, team2);

        if team1 == team2 {
            return Err(BattleError::InvalidState {
                battle: label,
                reason: format!("both teams are named {}", team1),
            });
        }
        if num_players == 0 {
            return Err(BattleError::InvalidState {
                battle: label,
                reason: "teams need at least one player".to_string(),
            });
        }

        let teams = match (Team::new(team1, num_players), Team::new(team2, num_players)) {
            (Ok(t1), Ok(t2)) => [t1, t2],
            (Err(e), _) | (_, Err(e)) => {
                return Err(BattleError::InvalidState {
                    battle: label,
                    reason: e.to_string(),
                });
            }
        };

        tracing::info!(battle = %label, num_players, "Battle created");

        Ok(Self {
            teams,
            matches: Vec::new(),
        })
    }

    /// "<team1> vs <team2>"
    pub fn label(&self) -> String {
        format!("{} vs {}", self.teams[0].name, self.teams[1].name)
    }

    pub fn team1(&self) -> &Team {
        &self.teams[0]
    }

    pub fn team2(&self) -> &Team {
        &self.teams[1]
    }

    /// Get the team playing on a side
    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side_to_index(side)]
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    /// Finished matches, oldest first
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    fn invalid(&self, reason: impl Into<String>) -> BattleError {
        BattleError::InvalidState {
            battle: self.label(),
            reason: reason.into(),
        }
    }

    fn violation(&self, taken1: u32, taken2: u32, reason: impl Into<String>) -> BattleError {
        BattleError::InvariantViolation {
            battle: self.label(),
            taken1,
            taken2,
            reason: reason.into(),
        }
    }

    fn team_index(&self, team_name: &str) -> Result<usize> {
        self.teams
            .iter()
            .position(|team| team.name == team_name)
            .ok_or_else(|| BattleError::UnknownTeam {
                battle: self.label(),
                team: team_name.to_string(),
            })
    }

    /// Find a team by exact name
    pub fn lookup(&self, team_name: &str) -> Result<&Team> {
        let idx = self.team_index(team_name)?;
        Ok(&self.teams[idx])
    }

    /// Field a new player for a team that has nobody active
    pub fn add_player(&mut self, team_name: &str, player_name: &str) -> Result<()> {
        let idx = self.team_index(team_name)?;
        if let Err(e) = self.teams[idx].add_player(player_name) {
            return Err(self.invalid(e.to_string()));
        }

        tracing::debug!(
            battle = %self.label(),
            team = team_name,
            player = player_name,
            "Player added"
        );
        Ok(())
    }

    /// Swap a team's active player for a new one
    pub fn replace_player(&mut self, team_name: &str, player_name: &str) -> Result<()> {
        let idx = self.team_index(team_name)?;
        let outgoing = self.teams[idx]
            .current_player()
            .map(|player| player.name.clone());
        self.teams[idx].replace_current_player(player_name);

        tracing::debug!(
            battle = %self.label(),
            team = team_name,
            player = player_name,
            outgoing = ?outgoing,
            "Player replaced"
        );
        Ok(())
    }

    /// Whether both teams have an active player
    pub fn match_ready(&self) -> bool {
        self.teams.iter().all(Team::has_current_player)
    }

    /// Whether some team has run out of stocks
    pub fn battle_over(&self) -> bool {
        self.teams.iter().any(Team::is_out)
    }

    pub fn phase(&self) -> Phase {
        if self.battle_over() {
            Phase::Over
        } else if self.match_ready() {
            Phase::Ready
        } else {
            Phase::Setup
        }
    }

    /// Record a finished match between the two active players
    ///
    /// `taken1` is how many stocks team 1's player took from team 2's player
    /// and `taken2` the reverse. Exactly one of them must equal the
    /// opponent's remaining stocks; that side is the winner.
    pub fn finish_match(
        &mut self,
        taken1: u32,
        taken2: u32,
        char1: impl Into<Character>,
        char2: impl Into<Character>,
    ) -> Result<MatchOutcome> {
        let (Some(p1_slot), Some(p2_slot)) =
            (self.teams[0].current_index(), self.teams[1].current_index())
        else {
            let missing: Vec<&str> = self
                .teams
                .iter()
                .filter(|team| !team.has_current_player())
                .map(Team::name)
                .collect();
            return Err(self.invalid(format!(
                "match not ready, no current player for {}",
                missing.join(" and ")
            )));
        };

        let p1_left = self.teams[0].players[p1_slot].left;
        let p2_left = self.teams[1].players[p2_slot].left;

        let winner = match (taken1 == p2_left, taken2 == p1_left) {
            (true, false) => Side::One,
            (false, true) => Side::Two,
            (false, false) => {
                return Err(self.violation(
                    taken1,
                    taken2,
                    format!(
                        "nobody won, the players had [{}] and [{}] stocks left",
                        p1_left, p2_left
                    ),
                ));
            }
            (true, true) => {
                return Err(self.violation(taken1, taken2, "both players cannot win"));
            }
        };

        let (loser_taken, winner_left) = match winner {
            Side::One => (taken2, p1_left),
            Side::Two => (taken1, p2_left),
        };
        if loser_taken >= winner_left {
            return Err(self.violation(
                taken1,
                taken2,
                format!(
                    "the loser cannot take [{}] of the winner's [{}] stocks",
                    loser_taken, winner_left
                ),
            ));
        }

        for (team, lost) in [(&self.teams[0], taken2), (&self.teams[1], taken1)] {
            if lost > team.stocks {
                return Err(self.violation(
                    taken1,
                    taken2,
                    format!("{} only has [{}] stocks left", team.name, team.stocks),
                ));
            }
        }

        self.teams[0].players[p1_slot].set_character(char1.into());
        self.teams[1].players[p2_slot].set_character(char2.into());

        self.teams[0].record_match_result(taken2, taken1);
        self.teams[1].record_match_result(taken1, taken2);

        let record = MatchRecord {
            p1: self.teams[0].players[p1_slot].clone(),
            p2: self.teams[1].players[p2_slot].clone(),
            p1_slot,
            p2_slot,
            p1_taken: taken1,
            p2_taken: taken2,
            winner,
        };
        self.matches.push(record.clone());

        let phase = self.phase();
        tracing::debug!(
            battle = %self.label(),
            result = %record,
            winner = winner.number(),
            stocks1 = self.teams[0].stocks,
            stocks2 = self.teams[1].stocks,
            "Match finished"
        );
        if phase == Phase::Over {
            tracing::info!(battle = %self.label(), "Battle finished");
        }

        Ok(MatchOutcome { record, phase })
    }

    fn standings(&self) -> Result<(&Team, &Team)> {
        let [team1, team2] = &self.teams;
        match (team1.is_out(), team2.is_out()) {
            (false, true) => Ok((team1, team2)),
            (true, false) => Ok((team2, team1)),
            (false, false) => Err(self.invalid("battle is not over yet")),
            (true, true) => Err(self.invalid("both teams are out of stocks, there is no winner")),
        }
    }

    /// The team with stocks left, once the battle is over
    pub fn winner(&self) -> Result<&Team> {
        self.standings().map(|(winner, _)| winner)
    }

    /// The team that ran out of stocks, once the battle is over
    pub fn loser(&self) -> Result<&Team> {
        self.standings().map(|(_, loser)| loser)
    }

    /// Change both teams' configured roster size
    ///
    /// The stock pools are left as they are.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        let needed = self
            .teams
            .iter()
            .map(Team::roster_len)
            .max()
            .unwrap_or(0)
            .max(1);
        if new_size < needed {
            return Err(self.invalid(format!(
                "cannot resize to {}, rosters already need {}",
                new_size, needed
            )));
        }

        for team in &mut self.teams {
            team.num_players = new_size;
        }
        tracing::debug!(battle = %self.label(), new_size, "Battle resized");
        Ok(())
    }

    /// Reverse the most recent match
    ///
    /// Both players are put back at their recorded roster slots. Anyone
    /// fielded after them has played no match since, so they are dropped
    /// from the roster, and a substituted player comes back. Repeated calls
    /// walk back through the whole history.
    pub fn undo(&mut self) -> Result<MatchRecord> {
        let Some(last) = self.matches.last() else {
            return Err(self.invalid("no matches to undo"));
        };

        for (team, slot) in [(&self.teams[0], last.p1_slot), (&self.teams[1], last.p2_slot)] {
            if slot > team.roster_len() {
                return Err(self.invalid(format!(
                    "{} has no roster slot {} for {}, cannot undo",
                    team.name, slot, last
                )));
            }
        }

        let Some(record) = self.matches.pop() else {
            return Err(self.invalid("no matches to undo"));
        };
        self.teams[0].rewind_to(record.p1_slot, record.p1.clone());
        self.teams[1].rewind_to(record.p2_slot, record.p2.clone());
        self.teams[0].reverse_match_result(record.p2_taken, record.p1_taken);
        self.teams[1].reverse_match_result(record.p1_taken, record.p2_taken);

        tracing::debug!(battle = %self.label(), result = %record, "Match undone");
        Ok(record)
    }
}

/// Convert Side enum to team index
pub fn side_to_index(side: Side) -> usize {
    match side {
        Side::One => 0,
        Side::Two => 1,
    }
}
