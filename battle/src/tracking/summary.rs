//! Text summary of a battle

use super::battle::Battle;

impl Battle {
    /// Render the battle as text
    ///
    /// One header line, one line per finished match, then either the result
    /// or the current score. The output depends only on the battle's data.
    pub fn summary(&self) -> String {
        let [team1, team2] = self.teams();

        let mut lines = Vec::with_capacity(self.matches().len() + 2);
        lines.push(format!(
            "{} vs {} ({}v{})",
            team1.name, team2.name, team1.num_players, team2.num_players
        ));
        lines.extend(self.matches().iter().map(ToString::to_string));

        let last = match (self.winner(), self.loser()) {
            (Ok(winner), Ok(loser)) => format!(
                "{} wins {} - 0 over {}",
                winner.name, winner.stocks, loser.name
            ),
            _ if self.battle_over() => {
                format!("Draw: {}[0] - {}[0]", team1.name, team2.name)
            }
            _ => format!(
                "Current score: {}[{}] - {}[{}]",
                team1.name, team1.stocks, team2.name, team2.stocks
            ),
        };
        lines.push(last);

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_fresh_battle() {
        let battle = Battle::new("A", "B", 5).unwrap();
        assert_eq!(battle.summary(), "A vs B (5v5)\nCurrent score: A[15] - B[15]");
    }

    #[test]
    fn test_summary_in_progress() {
        let mut battle = Battle::new("A", "B", 2).unwrap();
        battle.add_player("A", "p1").unwrap();
        battle.add_player("B", "p2").unwrap();
        battle.finish_match(3, 1, "Fox", "Marth").unwrap();

        assert_eq!(
            battle.summary(),
            "A vs B (2v2)\n\
             p1| Fox [3] vs [1] Marth|p2\n\
             Current score: A[5] - B[3]"
        );
    }

    #[test]
    fn test_summary_finished() {
        let mut battle = Battle::new("A", "B", 1).unwrap();
        battle.add_player("A", "p1").unwrap();
        battle.add_player("B", "p2").unwrap();
        battle.finish_match(1, 3, "Fox", "Marth").unwrap();

        assert_eq!(
            battle.summary(),
            "A vs B (1v1)\n\
             p1| Fox [1] vs [3] Marth|p2\n\
             B wins 2 - 0 over A"
        );
    }

    #[test]
    fn test_summary_double_elimination() {
        let mut battle = Battle::new("A", "B", 1).unwrap();
        battle.teams[0].stocks = 0;
        battle.teams[1].stocks = 0;

        assert_eq!(battle.summary(), "A vs B (1v1)\nDraw: A[0] - B[0]");
    }

    #[test]
    fn test_summary_is_stable() {
        let mut battle = Battle::new("A", "B", 3).unwrap();
        battle.add_player("A", "p1").unwrap();
        battle.add_player("B", "p2").unwrap();
        battle.finish_match(0, 3, "Fox", "Marth").unwrap();

        let first = battle.summary();
        assert_eq!(first, battle.summary());
        assert_eq!(battle.battle_over(), battle.battle_over());
    }
}
