mod board;
mod bot_controller;
mod game_state;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, apply_move, empty_board, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::GameState;
pub use session::{GameSession, Scoreboard, TurnOutcome};
pub use session_rng::SessionRng;
pub use types::{BotType, GameError, GameMode, GameStatus, Mark, Player, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
