//! Line-oriented console driver for a two-player game.
//!
//! Commands:
//! `select e2`, `move e2 e4`, `promote queen`, `board`, `log`, `quit`.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use plum_rules::chess_errors::GameResult;
use plum_rules::game::controller::{ChessGame, MoveOutcome, TurnPhase};
use plum_rules::game_state::chess_types::{Color, GameOutcome, Square};
use plum_rules::utils::render_game_state::{render_game_state, render_with_marks};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PLUM_RULES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_square(token: Option<&str>) -> Result<Square, String> {
    let token = token.ok_or("missing square")?;
    token.parse::<Square>().map_err(|e| e.to_string())
}

fn handle_command(game: &mut ChessGame, line: &str) -> Result<String, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(String::new());
    };

    let result: GameResult<String> = match command {
        "select" => {
            let origin = parse_square(parts.next())?;
            game.select_origin(origin).map(|selection| {
                render_with_marks(game.state(), selection.target_squares())
            })
        }
        "move" => {
            let origin = parse_square(parts.next())?;
            let target = parse_square(parts.next())?;
            game.apply_move(origin, target).map(|outcome| match outcome {
                MoveOutcome::Rejected => format!("illegal move {origin} {target}"),
                MoveOutcome::AwaitingPromotion => {
                    "promote to queen, rook, bishop or knight".to_owned()
                }
                _ => describe_last_move(game),
            })
        }
        "promote" => {
            let name = parts.next().ok_or("missing piece name")?;
            game.resolve_promotion_by_name(name)
                .map(|_| describe_last_move(game))
        }
        "board" => Ok(render_game_state(game.state())),
        "log" => Ok(describe_log(game)),
        other => return Err(format!("unknown command: {other}")),
    };

    result.map_err(|e| e.to_string())
}

fn describe_log(game: &ChessGame) -> String {
    let mut out = game.move_log().to_string();
    for color in Color::BOTH {
        let player = game.player(color);
        out.push_str(&format!(
            "{} captured {} piece(s)\n",
            player.color(),
            player.captured().len()
        ));
    }
    out
}

fn describe_last_move(game: &ChessGame) -> String {
    let notation = game
        .move_log()
        .last()
        .map(|entry| entry.notation.clone())
        .unwrap_or_default();
    let to_move = game.side_to_move();
    let mut out = format!("{notation}\n{}", render_game_state(game.state()));
    if game.in_check(to_move) && game.current_outcome() == GameOutcome::InProgress {
        out.push_str(&format!("\n{to_move} is in check"));
    }
    out
}

fn main() {
    init_logging();

    let mut game = ChessGame::new();
    let stdin = io::stdin();

    println!("{}", render_game_state(game.state()));

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let trimmed = line.trim();
        if trimmed == "quit" {
            break;
        }

        match handle_command(&mut game, trimmed) {
            Ok(text) if text.is_empty() => {}
            Ok(text) => println!("{text}"),
            Err(message) => println!("error: {message}"),
        }

        if let TurnPhase::GameOver(outcome) = game.phase() {
            println!("game over: {outcome}");
            break;
        }
    }
}
