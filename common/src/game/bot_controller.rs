use super::board::{Board, get_available_moves};
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{BotType, GameError, GameStatus, Mark, Player};
use super::win_detector::evaluate;

/// Snapshot handed to the move selector. The selector works on its own copy
/// of the board; the caller's state is never touched.
pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            current_player: state.current_player(),
        }
    }
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, GameError> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMoves);
    }
    let choice = rng.random_range(0..available_moves.len());
    Ok(available_moves[choice])
}

/// Exhaustive search over the full game tree. Among equally scored moves
/// the first in ascending index order wins, so the choice is deterministic.
pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, GameError> {
    let bot = input.current_player;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return Err(GameError::NoLegalMoves);
    }

    let mut board = input.board;
    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    // Each root move gets a fresh full window, so its score is the exact
    // minimax value and pruning cannot change which move is chosen.
    for index in available_moves {
        board[index] = bot.mark();
        let score = minimax(&mut board, bot, false, i32::MIN, i32::MAX);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    Ok(best_move)
}

/// Terminal scores are +1 / -1 / 0 regardless of depth: the search is
/// indifferent between faster and slower wins among equally optimal lines.
fn minimax(
    board: &mut Board,
    bot: Player,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate(board) {
        GameStatus::XWon => return if bot == Player::X { 1 } else { -1 },
        GameStatus::OWon => return if bot == Player::O { 1 } else { -1 },
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in get_available_moves(board) {
            board[index] = bot.mark();
            let eval = minimax(board, bot, false, alpha, beta);
            board[index] = Mark::Empty;

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        max_eval
    } else {
        let opponent = bot.opponent();
        let mut min_eval = i32::MAX;
        for index in get_available_moves(board) {
            board[index] = opponent.mark();
            let eval = minimax(board, bot, true, alpha, beta);
            board[index] = Mark::Empty;

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        min_eval
    }
}
