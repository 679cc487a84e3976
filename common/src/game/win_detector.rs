use super::board::{Board, is_board_full};
use super::types::{GameStatus, Mark, Player, WinningLine};

/// The 8 ways to win: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark == Mark::Empty {
            continue;
        }
        if board[b] == mark && board[c] == mark {
            let player = match mark {
                Mark::X => Player::X,
                Mark::O => Player::O,
                Mark::Empty => unreachable!(),
            };
            return Some(WinningLine::new(player, line));
        }
    }

    None
}

/// Recomputes the outcome from the board contents alone. In legal play at
/// most one player can have a completed line, so line order is irrelevant.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return match winner {
            Player::X => GameStatus::XWon,
            Player::O => GameStatus::OWon,
        };
    }

    if is_board_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
