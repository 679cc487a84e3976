use super::bot_controller::{BotInput, calculate_move};
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{GameError, GameMode, GameStatus, Player, WinningLine};
use super::win_detector::check_win_with_line;

/// Session-wide tallies. Reset only by explicit user action, never as part
/// of starting a new round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Everything the caller needs to render the turn that just happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub placed: usize,
    pub bot_reply: Option<usize>,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

/// Drives one game session: applies human moves, answers with bot moves
/// where the mode calls for it, and keeps the scoreboard. In `VsBot` mode
/// the human plays X and the bot plays O.
pub struct GameSession {
    game_state: GameState,
    mode: GameMode,
    rng: SessionRng,
    scoreboard: Scoreboard,
}

impl GameSession {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        Self {
            game_state: GameState::new(),
            mode,
            rng,
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Applies the current player's move. When the game continues and the
    /// mode puts a bot on the other side, the bot reply is computed and
    /// applied within the same call.
    ///
    /// A terminal outcome is recorded in the scoreboard exactly once:
    /// `place_mark` rejects any move after the terminal transition, so no
    /// later call can observe it again.
    pub fn play_turn(&mut self, index: usize) -> Result<TurnOutcome, GameError> {
        self.game_state.place_mark(index)?;

        let mut bot_reply = None;
        if self.game_state.status() == GameStatus::InProgress {
            if let GameMode::VsBot(bot_type) = self.mode {
                if self.game_state.current_player() == Player::O {
                    let snapshot = BotInput::from_game_state(&self.game_state);
                    let reply = calculate_move(bot_type, &snapshot, &mut self.rng)?;
                    self.game_state.place_mark(reply)?;
                    bot_reply = Some(reply);
                }
            }
        }

        let status = self.game_state.status();
        if status.is_terminal() {
            self.scoreboard.record(status);
        }

        Ok(TurnOutcome {
            placed: index,
            bot_reply,
            status,
            winning_line: check_win_with_line(self.game_state.board()),
        })
    }

    /// Starts a new round. Tallies survive; the board and turn do not.
    pub fn reset_board(&mut self) {
        self.game_state.reset();
    }

    pub fn reset_scoreboard(&mut self) {
        self.scoreboard.reset();
    }

    /// Switching modes abandons the current round, as the original mode
    /// selection did.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.game_state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::board::empty_board;
    use super::super::bot_controller::calculate_minimax_move;
    use super::super::types::BotType;

    fn two_player_session() -> GameSession {
        GameSession::new(GameMode::TwoPlayer, SessionRng::new(1))
    }

    #[test]
    fn test_two_player_turns_have_no_bot_reply() {
        let mut session = two_player_session();

        let outcome = session.play_turn(0).unwrap();
        assert_eq!(outcome.placed, 0);
        assert_eq!(outcome.bot_reply, None);
        assert_eq!(outcome.status, GameStatus::InProgress);

        let outcome = session.play_turn(4).unwrap();
        assert_eq!(outcome.bot_reply, None);
    }

    #[test]
    fn test_vs_bot_replies_within_the_same_turn() {
        let mut session = GameSession::new(GameMode::VsBot(BotType::Minimax), SessionRng::new(1));

        let outcome = session.play_turn(4).unwrap();

        let reply = outcome.bot_reply.unwrap();
        assert_ne!(reply, 4);
        assert_eq!(session.game_state().current_player(), Player::X);
    }

    #[test]
    fn test_minimax_bot_never_loses_a_session() {
        // Human plays the strongest reply each turn via the same search.
        let mut session = GameSession::new(GameMode::VsBot(BotType::Minimax), SessionRng::new(1));

        loop {
            let snapshot = BotInput::from_game_state(session.game_state());
            let human_move = calculate_minimax_move(&snapshot).unwrap();
            let outcome = session.play_turn(human_move).unwrap();
            if outcome.status.is_terminal() {
                assert_eq!(outcome.status, GameStatus::Draw);
                break;
            }
        }

        assert_eq!(session.scoreboard().draws, 1);
        assert_eq!(session.scoreboard().x_wins, 0);
        assert_eq!(session.scoreboard().o_wins, 0);
    }

    #[test]
    fn test_scoreboard_counts_each_outcome_once() {
        let mut session = two_player_session();

        // X: 0, 1, 2 wins; O: 3, 4.
        for index in [0, 3, 1, 4] {
            session.play_turn(index).unwrap();
        }
        let outcome = session.play_turn(2).unwrap();
        assert_eq!(outcome.status, GameStatus::XWon);
        assert_eq!(outcome.winning_line.unwrap().cells, [0, 1, 2]);
        assert_eq!(session.scoreboard().x_wins, 1);

        // Further moves are rejected and do not touch the tallies.
        assert_eq!(session.play_turn(5), Err(GameError::GameAlreadyOver));
        assert_eq!(session.scoreboard().x_wins, 1);
    }

    #[test]
    fn test_reset_board_keeps_tallies() {
        let mut session = two_player_session();
        for index in [0, 3, 1, 4, 2] {
            session.play_turn(index).unwrap();
        }
        assert_eq!(session.scoreboard().x_wins, 1);

        session.reset_board();

        assert_eq!(session.game_state().status(), GameStatus::InProgress);
        assert_eq!(session.game_state().current_player(), Player::X);
        assert_eq!(session.scoreboard().x_wins, 1);
    }

    #[test]
    fn test_reset_scoreboard_zeroes_tallies() {
        let mut session = two_player_session();
        for index in [0, 3, 1, 4, 2] {
            session.play_turn(index).unwrap();
        }

        session.reset_scoreboard();

        assert_eq!(*session.scoreboard(), Scoreboard::new());
    }

    #[test]
    fn test_set_mode_abandons_current_round() {
        let mut session = two_player_session();
        session.play_turn(0).unwrap();

        session.set_mode(GameMode::VsBot(BotType::Random));

        assert_eq!(session.mode(), GameMode::VsBot(BotType::Random));
        assert_eq!(*session.game_state().board(), empty_board());
    }
}
