mod config;

use clap::Parser;
use common::{
    BotType, GameMode, GameSession, GameStatus, Mark, SessionRng, TurnOutcome, log, logger,
};
use config::get_config_manager;
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Session RNG seed; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match get_config_manager().get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!("Starting session (seed {})", rng.seed());
    let mut session = GameSession::new(config.game_mode(), rng);

    print_help();
    run(&mut session, config.bot_delay_ms);

    let stats = session.scoreboard();
    log!(
        "Session over: X {} / O {} / draws {}",
        stats.x_wins,
        stats.o_wins,
        stats.draws
    );
}

fn run(session: &mut GameSession, bot_delay_ms: u32) {
    let stdin = std::io::stdin();

    loop {
        render_board(session);
        prompt(session);

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        }

        match line.trim() {
            "" => {}
            "q" => break,
            "r" => {
                session.reset_board();
                log!("New round");
            }
            "s" => print_stats(session),
            "z" => {
                session.reset_scoreboard();
                log!("Scoreboard reset");
            }
            "t" => {
                session.set_mode(GameMode::TwoPlayer);
                log!("Two player mode");
            }
            "e" => {
                session.set_mode(GameMode::VsBot(BotType::Random));
                log!("Playing vs easy bot");
            }
            "h" => {
                session.set_mode(GameMode::VsBot(BotType::Minimax));
                log!("Playing vs hard bot");
            }
            other => match other.parse::<usize>() {
                Ok(index) if index < 9 => play(session, index, bot_delay_ms),
                _ => print_help(),
            },
        }
    }
}

fn play(session: &mut GameSession, index: usize, bot_delay_ms: u32) {
    let outcome = match session.play_turn(index) {
        Ok(outcome) => outcome,
        Err(e) => {
            log!("Move rejected: {}", e);
            return;
        }
    };

    if outcome.bot_reply.is_some() && bot_delay_ms > 0 {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(bot_delay_ms)));
    }

    announce(session, &outcome);
}

fn announce(session: &GameSession, outcome: &TurnOutcome) {
    if let Some(reply) = outcome.bot_reply {
        log!("Bot plays {}", reply);
    }

    match outcome.status {
        GameStatus::InProgress => {}
        GameStatus::Draw => {
            render_board(session);
            log!("It's a draw!");
            print_stats(session);
        }
        GameStatus::XWon | GameStatus::OWon => {
            render_board(session);
            if let Some(line) = outcome.winning_line {
                log!(
                    "Player {} wins on cells {}, {}, {}!",
                    line.player,
                    line.cells[0],
                    line.cells[1],
                    line.cells[2]
                );
            }
            print_stats(session);
        }
    }
}

fn render_board(session: &GameSession) {
    let board = session.game_state().board();

    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match board[index] {
                    Mark::Empty => index.to_string(),
                    Mark::X => "X".to_string(),
                    Mark::O => "O".to_string(),
                }
            })
            .collect();
        println!(" {} | {} | {}", cells[0], cells[1], cells[2]);
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn prompt(session: &GameSession) {
    if session.game_state().status() == GameStatus::InProgress {
        print!("Player {} > ", session.game_state().current_player());
    } else {
        print!("Round over (r for a new one) > ");
    }
    let _ = std::io::stdout().flush();
}

fn print_stats(session: &GameSession) {
    let stats = session.scoreboard();
    log!(
        "X wins: {} | O wins: {} | draws: {}",
        stats.x_wins,
        stats.o_wins,
        stats.draws
    );
}

fn print_help() {
    println!("Enter a cell index (0-8) to place your mark.");
    println!("Commands: r new round, s stats, z reset stats,");
    println!("          t two players, e easy bot, h hard bot, q quit.");
}
