use super::board::{Board, apply_move, empty_board};
use super::types::{GameError, GameStatus, Player};
use super::win_detector::evaluate;

/// Board plus turn tracking. The outcome is never cached; `status`
/// recomputes it from the board contents on every call.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_player: Player::X,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Places the current player's mark at `index` and passes the turn.
    /// On error the state is unchanged.
    pub fn place_mark(&mut self, index: usize) -> Result<(), GameError> {
        self.board = apply_move(&self.board, index, self.current_player)?;
        self.last_move = Some(index);

        if self.status() == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Back to the empty board with X to move.
    pub fn reset(&mut self) {
        self.board = empty_board();
        self.current_player = Player::X;
        self.last_move = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::Mark;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = GameState::new();

        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = GameState::new();

        state.place_mark(0).unwrap();
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board()[0], Mark::X);

        state.place_mark(4).unwrap();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.board()[4], Mark::O);
    }

    #[test]
    fn test_place_mark_on_occupied_cell_leaves_state_unchanged() {
        let mut state = GameState::new();
        state.place_mark(0).unwrap();
        let board_before = *state.board();

        assert_eq!(state.place_mark(0), Err(GameError::CellOccupied));
        assert_eq!(*state.board(), board_before);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_place_mark_rejected_after_win() {
        let mut state = GameState::new();
        // X: 0, 1, 2 wins; O: 3, 4.
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.place_mark(5), Err(GameError::GameAlreadyOver));
        assert_eq!(state.status(), GameStatus::XWon);
    }

    #[test]
    fn test_full_game_without_line_ends_in_draw() {
        let mut state = GameState::new();
        // X O X / X O O / O X X with no three in a row.
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(index).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.place_mark(0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_reset_clears_board_and_turn() {
        let mut state = GameState::new();
        state.place_mark(0).unwrap();
        state.place_mark(4).unwrap();

        state.reset();

        assert_eq!(*state.board(), empty_board());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.last_move(), None);
    }
}
