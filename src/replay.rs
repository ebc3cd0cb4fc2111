//! Headless replay of a move list against a [`GameState`].

use log::info;

use crate::game::{GameState, Outcome, PlayerNumber};

/// One column drop as it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// 1-based position in the move list
    pub index: usize,
    pub player: PlayerNumber,
    pub column: isize,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub records: Vec<MoveRecord>,
    /// Moves left unplayed because the game ended first
    pub skipped: usize,
}

impl ReplayReport {
    /// Records whose drop was ignored
    pub fn rejected(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Rejected(_)))
    }
}

/// Apply `moves` in order. Rejected drops are recorded and play goes on;
/// once a drop ends the game the rest are counted as skipped.
pub fn replay(game: &mut GameState, moves: &[isize]) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (i, &column) in moves.iter().enumerate() {
        let player = game.current_player().number();
        let outcome = game.drop_piece(column);
        info!(
            "move {}: player {} -> column {}: {:?}",
            i + 1,
            player.number(),
            column,
            outcome
        );
        report.records.push(MoveRecord {
            index: i + 1,
            player,
            column,
            outcome,
        });

        if outcome.is_terminal() {
            report.skipped = moves.len() - i - 1;
            break;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameResult, RejectReason};

    #[test]
    fn test_replay_stops_after_win() {
        let mut game = GameState::new("red", "blue");
        let report = replay(&mut game, &[0, 0, 1, 1, 2, 2, 3, 4, 5]);

        assert_eq!(report.records.len(), 7);
        assert_eq!(report.skipped, 2);
        assert_eq!(
            report.records.last().map(|r| r.outcome),
            Some(Outcome::Win(PlayerNumber::One))
        );
        assert_eq!(game.result(), Some(GameResult::Win(PlayerNumber::One)));
        assert_eq!(game.moves_played(), 7);
    }

    #[test]
    fn test_rejected_moves_recorded_and_play_continues() {
        let mut game = GameState::new("red", "blue");
        let report = replay(&mut game, &[-1, 3, 9, 3]);

        assert_eq!(report.skipped, 0);
        let rejected: Vec<_> = report.rejected().map(|r| (r.index, r.outcome)).collect();
        assert_eq!(
            rejected,
            vec![
                (1, Outcome::Rejected(RejectReason::OutOfRange)),
                (3, Outcome::Rejected(RejectReason::OutOfRange)),
            ]
        );
        // The turn only passes on accepted drops
        assert_eq!(report.records[1].player, PlayerNumber::One);
        assert_eq!(report.records[3].player, PlayerNumber::Two);
        assert_eq!(game.moves_played(), 2);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_full_column_rejected() {
        let mut game = GameState::with_dimensions("red", "blue", 2, 3).unwrap();
        let report = replay(&mut game, &[1, 1, 1]);
        assert_eq!(
            report.records[2].outcome,
            Outcome::Rejected(RejectReason::ColumnFull)
        );
        assert_eq!(report.rejected().count(), 1);
    }

    #[test]
    fn test_last_move_win_skips_nothing() {
        let mut game = GameState::new("red", "blue");
        let report = replay(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_empty_move_list() {
        let mut game = GameState::new("red", "blue");
        assert_eq!(replay(&mut game, &[]), ReplayReport::default());
    }
}
