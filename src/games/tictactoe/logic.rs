//! Tic-tac-toe game logic: move placement, win/draw detection.

use super::types::{TttGame, TttOutcome};
use rand::Rng;

/// UI-agnostic input commands for tic-tac-toe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TttInput {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Place the current mark at the cursor.
    Place,
    /// Clear the board and re-roll the starting mark.
    Restart,
}

/// Process one input command.
///
/// Placements into occupied cells, or after the game has finished, are
/// silently ignored. Restart works at any time, as the original's refresh
/// button does.
pub fn process_input<R: Rng>(game: &mut TttGame, input: TttInput, rng: &mut R) {
    match input {
        TttInput::CursorUp => game.move_cursor(-1, 0),
        TttInput::CursorDown => game.move_cursor(1, 0),
        TttInput::CursorLeft => game.move_cursor(0, -1),
        TttInput::CursorRight => game.move_cursor(0, 1),
        TttInput::Place => place_at_cursor(game),
        TttInput::Restart => *game = TttGame::new(rng),
    }
}

/// Place the current mark at the cursor, then settle the outcome.
fn place_at_cursor(game: &mut TttGame) {
    if game.outcome.is_some() || game.board[game.cursor].is_some() {
        return;
    }

    game.board[game.cursor] = Some(game.turn);

    if let Some((mark, line)) = game.winning_line() {
        game.outcome = Some(TttOutcome::Won { mark, line });
    } else if game.is_full() {
        game.outcome = Some(TttOutcome::Draw);
    } else {
        game.turn = game.turn.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(13)
    }

    fn game_starting_with(mark: Mark) -> TttGame {
        let mut rng = rng();
        let mut game = TttGame::new(&mut rng);
        game.turn = mark;
        game
    }

    fn place(game: &mut TttGame, cell: usize) {
        let mut rng = rng();
        game.cursor = cell;
        process_input(game, TttInput::Place, &mut rng);
    }

    #[test]
    fn test_place_alternates_turns() {
        let mut game = game_starting_with(Mark::X);
        place(&mut game, 0);
        assert_eq!(game.board[0], Some(Mark::X));
        assert_eq!(game.turn, Mark::O);

        place(&mut game, 1);
        assert_eq!(game.board[1], Some(Mark::O));
        assert_eq!(game.turn, Mark::X);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = game_starting_with(Mark::X);
        place(&mut game, 0);
        place(&mut game, 0);
        assert_eq!(game.board[0], Some(Mark::X));
        // Turn did not advance for the rejected move
        assert_eq!(game.turn, Mark::O);
    }

    #[test]
    fn test_row_win() {
        let mut game = game_starting_with(Mark::X);
        for cell in [0, 3, 1, 4, 2] {
            place(&mut game, cell);
        }
        assert_eq!(
            game.outcome,
            Some(TttOutcome::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            })
        );
    }

    #[test]
    fn test_column_win() {
        let mut game = game_starting_with(Mark::O);
        for cell in [1, 0, 4, 2, 7] {
            place(&mut game, cell);
        }
        assert_eq!(
            game.outcome,
            Some(TttOutcome::Won {
                mark: Mark::O,
                line: [1, 4, 7]
            })
        );
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = game_starting_with(Mark::X);
        for cell in [0, 1, 4, 2, 8] {
            place(&mut game, cell);
        }
        assert_eq!(
            game.outcome,
            Some(TttOutcome::Won {
                mark: Mark::X,
                line: [0, 4, 8]
            })
        );
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut game = game_starting_with(Mark::X);
        // X O X / X X O / O X O, no three in a row
        for cell in [0, 1, 2, 5, 3, 6, 4, 8, 7] {
            place(&mut game, cell);
        }
        assert_eq!(game.outcome, Some(TttOutcome::Draw));
    }

    #[test]
    fn test_no_moves_after_finish() {
        let mut game = game_starting_with(Mark::X);
        for cell in [0, 3, 1, 4, 2] {
            place(&mut game, cell);
        }
        assert!(game.outcome.is_some());

        place(&mut game, 8);
        assert_eq!(game.board[8], None);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut game = game_starting_with(Mark::X);
        for cell in [0, 3, 1, 4, 2] {
            place(&mut game, cell);
        }

        let mut rng = rng();
        process_input(&mut game, TttInput::Restart, &mut rng);
        assert!(game.board.iter().all(|c| c.is_none()));
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_cursor_inputs_route_to_moves() {
        let mut game = game_starting_with(Mark::X);
        let mut rng = rng();
        game.cursor = 4;
        process_input(&mut game, TttInput::CursorUp, &mut rng);
        assert_eq!(game.cursor, 1);
        process_input(&mut game, TttInput::CursorRight, &mut rng);
        assert_eq!(game.cursor, 2);
        process_input(&mut game, TttInput::CursorDown, &mut rng);
        assert_eq!(game.cursor, 5);
        process_input(&mut game, TttInput::CursorLeft, &mut rng);
        assert_eq!(game.cursor, 4);
    }
}
